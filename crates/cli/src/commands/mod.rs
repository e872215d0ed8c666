use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use wayfarer_store::{Filter, Store, StoreConfig};

/// Count command module.
mod count;
/// Find command module.
mod find;
/// Script command module.
mod run;
/// Seed command module.
mod seed;
/// Stats command module.
mod stats;

/// The CLI for the Wayfarer mock document store.
///
/// Every invocation builds a new in-memory store, seeds it with the sample
/// travel content and runs one command against it. Nothing outlives the
/// process.
#[derive(Parser)]
#[command(name = "wayfarer", version)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a JSON store configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Enumeration of all available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Seed the store and print the seed report.
    Seed(seed::SeedArgs),
    /// Print the number of documents in every collection.
    Stats(stats::StatsArgs),
    /// Print the documents of a collection matching a filter.
    Find(find::FindArgs),
    /// Print how many documents of a collection match a filter.
    Count(count::CountArgs),
    /// Execute a JSON script of store operations in order.
    ///
    /// The script is a JSON array of objects such as
    /// `{"op": "updateOne", "collection": "posts", "filter": {...}, "update": {...}}`.
    Run(run::RunArgs),
}

/// Execute the specified CLI command.
///
/// Loads the store configuration, initializes a store and dispatches to the
/// command handler.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or a `StoreError` on failure.
pub async fn run_command(cli: Cli) -> wayfarer_store::Result<()> {
    let config = match &cli.config {
        Some(path) => StoreConfig::load(path).await?,
        None => StoreConfig::default(),
    };
    let store = open_store(config).await?;

    match cli.command {
        Commands::Seed(args) => seed::run(&store, args).await,
        Commands::Stats(args) => stats::run(&store, args).await,
        Commands::Find(args) => find::run(&store, args).await,
        Commands::Count(args) => count::run(&store, args).await,
        Commands::Run(args) => run::run(&store, args).await,
    }
}

/// Creates a store from `config` and initializes it.
///
/// Seeding failures are logged; the store is returned either way.
pub async fn open_store(config: StoreConfig) -> wayfarer_store::Result<Store> {
    let store = Store::with_config(config)?;
    let report = store.initialize().await;
    info!(
        "Store ready: {} documents seeded",
        report.total_inserted()
    );
    for failure in report.failures() {
        warn!(
            "Collection '{}' could not be seeded: {:?}",
            failure.collection, failure.outcome
        );
    }
    Ok(store)
}

/// Parses an optional JSON filter argument; `None` matches everything.
pub fn parse_filter(raw: Option<&str>) -> wayfarer_store::Result<Filter> {
    match raw {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            Filter::try_from(value)
        },
        None => Ok(Filter::new()),
    }
}

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T>(value: &T) -> wayfarer_store::Result<()>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout, reason = "CLI output")]
    {
        println!("{}", json);
    }
    Ok(())
}
