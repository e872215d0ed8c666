use clap::Args;
use tracing::{info, warn};
use wayfarer_store::Store;

use super::{parse_filter, print_json};

/// Arguments for the find command.
#[derive(Args, Clone, Default)]
pub struct FindArgs {
    /// Collection name
    pub collection: String,
    /// Filter as a JSON object, e.g. '{"category": "Beaches"}'
    pub filter:     Option<String>,
    /// Print only the first matching document
    #[arg(long)]
    pub one:        bool,
}

/// Print the documents of a collection matching a filter.
///
/// With `--one` only the first match is printed; a missing document is
/// logged as a warning, not treated as an error.
pub async fn run(store: &Store, args: FindArgs) -> wayfarer_store::Result<()> {
    let filter = parse_filter(args.filter.as_deref())?;
    let collection = store.collection(&args.collection);

    if args.one {
        match collection.find_one(&filter).await? {
            Some(doc) => print_json(&doc),
            None => {
                warn!("No document in '{}' matched", args.collection);
                Ok(())
            },
        }
    }
    else {
        let docs = collection.find(&filter).await?;
        info!(
            "Found {} documents in '{}'",
            docs.len(),
            args.collection
        );
        print_json(&docs)
    }
}
