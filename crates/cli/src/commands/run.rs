use std::path::PathBuf;

use clap::Args;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use wayfarer_store::{Filter, Store, Update};

use super::print_json;

/// Arguments for the run command.
#[derive(Args, Clone, Default)]
pub struct RunArgs {
    /// Path to a JSON file holding an array of operations
    pub script: PathBuf,
}

/// One scripted store operation.
///
/// Filters may be omitted or `null` to match every document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ScriptOp {
    /// `find`: every matching document.
    Find {
        collection: String,
        #[serde(default)]
        filter:     Value,
    },
    /// `findOne`: the first matching document or `null`.
    FindOne {
        collection: String,
        #[serde(default)]
        filter:     Value,
    },
    /// `insertOne`: append a document.
    InsertOne {
        collection: String,
        document:   Value,
    },
    /// `updateOne`: update the first matching document.
    UpdateOne {
        collection: String,
        #[serde(default)]
        filter:     Value,
        update:     Value,
    },
    /// `deleteOne`: remove the first matching document.
    DeleteOne {
        collection: String,
        #[serde(default)]
        filter:     Value,
    },
    /// `countDocuments`: number of matching documents.
    CountDocuments {
        collection: String,
        #[serde(default)]
        filter:     Value,
    },
}

/// Execute a script of store operations and print each result.
pub async fn run(store: &Store, args: RunArgs) -> wayfarer_store::Result<()> {
    info!("Running script {:?}", args.script);
    let content = tokio::fs::read_to_string(&args.script).await?;
    let ops: Vec<ScriptOp> = serde_json::from_str(&content)?;

    let results = execute(store, ops).await?;
    print_json(&results)
}

/// Executes `ops` in order, stopping at the first failing operation.
///
/// # Returns
/// Returns one JSON result per operation.
pub async fn execute(store: &Store, ops: Vec<ScriptOp>) -> wayfarer_store::Result<Vec<Value>> {
    let mut results = Vec::with_capacity(ops.len());
    for (index, op) in ops.into_iter().enumerate() {
        debug!("Executing script operation {}: {:?}", index, op);
        results.push(execute_one(store, op).await?);
    }
    Ok(results)
}

async fn execute_one(store: &Store, op: ScriptOp) -> wayfarer_store::Result<Value> {
    let value = match op {
        ScriptOp::Find {
            collection,
            filter,
        } => {
            let docs = store
                .collection(&collection)
                .find(&Filter::try_from(filter)?)
                .await?;
            serde_json::to_value(docs)?
        },
        ScriptOp::FindOne {
            collection,
            filter,
        } => {
            let doc = store
                .collection(&collection)
                .find_one(&Filter::try_from(filter)?)
                .await?;
            serde_json::to_value(doc)?
        },
        ScriptOp::InsertOne {
            collection,
            document,
        } => {
            let result = store.collection(&collection).insert_one(document).await?;
            serde_json::to_value(result)?
        },
        ScriptOp::UpdateOne {
            collection,
            filter,
            update,
        } => {
            let result = store
                .collection(&collection)
                .update_one(&Filter::try_from(filter)?, &Update::try_from(update)?)
                .await?;
            serde_json::to_value(result)?
        },
        ScriptOp::DeleteOne {
            collection,
            filter,
        } => {
            let result = store
                .collection(&collection)
                .delete_one(&Filter::try_from(filter)?)
                .await?;
            serde_json::to_value(result)?
        },
        ScriptOp::CountDocuments {
            collection,
            filter,
        } => {
            let count = store
                .collection(&collection)
                .count_documents(&Filter::try_from(filter)?)
                .await?;
            Value::from(count)
        },
    };
    Ok(value)
}
