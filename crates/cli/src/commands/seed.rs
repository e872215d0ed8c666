use clap::Args;
use tracing::info;
use wayfarer_store::Store;

use super::print_json;

/// Arguments for the seed command.
#[derive(Args, Clone, Default)]
pub struct SeedArgs {
    /// Only log the totals instead of printing the full report
    #[arg(long)]
    pub quiet: bool,
}

/// Print the report of the seeding run that initialized `store`.
///
/// The store is already initialized by the time a command runs, so this
/// returns the memoized report without seeding again.
pub async fn run(store: &Store, args: SeedArgs) -> wayfarer_store::Result<()> {
    let report = store.initialize().await;
    info!(
        "Seeded {} documents into {} collections ({} failed)",
        report.total_inserted(),
        report.entries().len(),
        report.failures().len()
    );
    if args.quiet {
        return Ok(());
    }
    print_json(&report)
}
