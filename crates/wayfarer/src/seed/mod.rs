//! One-time population of an empty store with sample travel content.
//!
//! The seeder visits collections in a fixed order and only fills collections
//! that are still empty, so running it again never duplicates or overwrites
//! data. Failures are logged and recorded in the [`SeedReport`]; they never
//! stop the remaining collections from being seeded.

/// Fixed sample records.
pub mod fixtures;
/// Seeding outcomes.
pub mod report;

use serde_json::Value;
use tracing::{debug, error, info, trace};

use crate::{
    constants::{COMMENTS, COMMUNITY_POSTS, POSTS, SEED_ORDER},
    Filter,
    Result,
    Store,
    StoreError,
};
pub use report::{SeedEntry, SeedOutcome, SeedReport};

/// Where the records of a seed step come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    /// A fixed list of records.
    Records(Vec<Value>),
    /// Comments built from the first seeded post and community post.
    Comments,
}

/// One collection visited by the seeder.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedStep {
    /// Collection to fill
    pub collection: String,
    /// Records to insert when the collection is empty
    pub source:     SeedSource,
}

/// An ordered seeding plan.
///
/// `Seeder::default()` is the standard plan: every collection of
/// [`SEED_ORDER`] with its fixtures, and comments last.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wayfarer_store::{seed::Seeder, Store, StoreConfig};
///
/// # async fn example() -> wayfarer_store::Result<()> {
/// let seeder = Seeder::empty().with_records("categories", vec![json!({"name": "Deserts"})]);
/// let store = Store::with_seeder(StoreConfig::default(), seeder)?;
///
/// let report = store.initialize().await;
/// assert_eq!(report.total_inserted(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Seeder {
    steps: Vec<SeedStep>,
}

impl Default for Seeder {
    fn default() -> Self {
        let steps = SEED_ORDER
            .iter()
            .map(|collection| {
                let source = if *collection == COMMENTS {
                    SeedSource::Comments
                }
                else {
                    SeedSource::Records(fixtures::records(collection))
                };
                SeedStep {
                    collection: (*collection).to_owned(),
                    source,
                }
            })
            .collect();
        Self {
            steps,
        }
    }
}

impl Seeder {
    /// Creates the standard seeding plan.
    pub fn new() -> Self { Self::default() }

    /// Creates a plan that visits no collections.
    pub const fn empty() -> Self {
        Self {
            steps: Vec::new(),
        }
    }

    /// Sets the records seeded into `collection`.
    ///
    /// An existing step for the collection keeps its position and has its
    /// records replaced; otherwise a new step is appended.
    #[must_use]
    pub fn with_records(mut self, collection: &str, records: Vec<Value>) -> Self {
        let source = SeedSource::Records(records);
        if let Some(step) = self.steps.iter_mut().find(|step| step.collection == collection) {
            step.source = source;
        }
        else {
            self.steps.push(SeedStep {
                collection: collection.to_owned(),
                source,
            });
        }
        self
    }

    /// Returns the steps in visit order.
    pub fn steps(&self) -> &[SeedStep] { &self.steps }

    /// Runs the plan against `store`.
    ///
    /// Each collection is counted first; non-empty collections are skipped.
    /// A failing collection is logged and recorded, and the next one is
    /// processed.
    ///
    /// # Returns
    ///
    /// Returns a report with one entry per step.
    pub async fn run(&self, store: &Store) -> SeedReport {
        trace!("Running seeder over {} collections", self.steps.len());
        let mut report = SeedReport::default();
        for step in &self.steps {
            let outcome = match seed_step(store, step).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    let err = StoreError::Seed {
                        collection: step.collection.clone(),
                        reason:     e.to_string(),
                    };
                    error!("{}", err);
                    SeedOutcome::Failed {
                        reason: e.to_string(),
                    }
                },
            };
            report.record(&step.collection, outcome);
        }
        info!(
            "Seeding finished: {} documents inserted, {} collections failed",
            report.total_inserted(),
            report.failures().len()
        );
        report
    }
}

async fn seed_step(store: &Store, step: &SeedStep) -> Result<SeedOutcome> {
    let collection = store.collection(&step.collection);
    let existing = collection.count_documents(&Filter::new()).await?;
    if existing > 0 {
        debug!(
            "Collection {} already holds {} documents, skipping",
            step.collection, existing
        );
        return Ok(SeedOutcome::Skipped {
            existing,
        });
    }

    let records = match &step.source {
        SeedSource::Records(records) => records.clone(),
        SeedSource::Comments => comment_records(store).await?,
    };
    if records.is_empty() {
        debug!("No records to seed into collection {}", step.collection);
        return Ok(SeedOutcome::NoFixtures);
    }

    let mut inserted = 0_u64;
    for record in records {
        collection.insert_one(record).await?;
        inserted = inserted.saturating_add(1);
    }
    debug!(
        "Seeded {} documents into collection {}",
        inserted, step.collection
    );
    Ok(SeedOutcome::Seeded {
        inserted,
    })
}

/// Builds comment records keyed to the first post and first community post.
async fn comment_records(store: &Store) -> Result<Vec<Value>> {
    let mut records = Vec::new();

    match first_id(store, POSTS).await? {
        Some(post_id) => records.extend(fixtures::post_comments(&post_id)),
        None => debug!("Collection {} is empty, skipping post comments", POSTS),
    }
    match first_id(store, COMMUNITY_POSTS).await? {
        Some(post_id) => records.extend(fixtures::community_comments(&post_id)),
        None => {
            debug!(
                "Collection {} is empty, skipping community comments",
                COMMUNITY_POSTS
            );
        },
    }

    Ok(records)
}

async fn first_id(store: &Store, collection: &str) -> Result<Option<String>> {
    let first = store
        .collection(collection)
        .find_one(&Filter::new())
        .await?;
    Ok(first.and_then(|doc| doc.id().map(str::to_owned)))
}
