use clap::Args;
use tracing::info;
use wayfarer_store::Store;

use super::print_json;

/// Arguments for the stats command.
#[derive(Args, Clone, Default)]
pub struct StatsArgs {
    /// Include collections that hold no documents
    #[arg(long)]
    pub all: bool,
}

/// Print the number of documents in every collection of `store`.
pub async fn run(store: &Store, args: StatsArgs) -> wayfarer_store::Result<()> {
    let mut stats = store.stats().await?;
    if !args.all {
        stats.retain(|s| s.documents > 0);
    }
    let total = stats.iter().map(|s| s.documents).sum::<u64>();
    info!(
        "{} documents across {} collections",
        total,
        stats.len()
    );
    print_json(&stats)
}
