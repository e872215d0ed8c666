use clap::Args;
use tracing::info;
use wayfarer_store::Store;

use super::{parse_filter, print_json};

/// Arguments for the count command.
#[derive(Args, Clone, Default)]
pub struct CountArgs {
    /// Collection name
    pub collection: String,
    /// Filter as a JSON object, e.g. '{"category": "Beaches"}'
    pub filter:     Option<String>,
}

/// Print how many documents of a collection match a filter.
pub async fn run(store: &Store, args: CountArgs) -> wayfarer_store::Result<()> {
    let filter = parse_filter(args.filter.as_deref())?;
    let count = store
        .collection(&args.collection)
        .count_documents(&filter)
        .await?;
    info!(
        "Collection '{}' has {} matching documents",
        args.collection, count
    );
    print_json(&count)
}
