use serde::Serialize;

/// What the seeder did with one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SeedOutcome {
    /// The collection was empty and the fixtures were inserted.
    Seeded {
        inserted: u64,
    },
    /// The collection already held documents and was left untouched.
    Skipped {
        existing: u64,
    },
    /// There was nothing to insert, for example because a prerequisite
    /// collection was empty.
    NoFixtures,
    /// Seeding failed; later collections were still processed.
    Failed {
        reason: String,
    },
}

/// The outcome for a single collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedEntry {
    /// Collection name
    pub collection: String,
    /// What happened to it
    #[serde(flatten)]
    pub outcome:    SeedOutcome,
}

/// Summary of a seeding run, one entry per visited collection in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    entries: Vec<SeedEntry>,
}

impl SeedReport {
    /// Returns all entries in the order the collections were visited.
    pub fn entries(&self) -> &[SeedEntry] { &self.entries }

    /// Returns the outcome recorded for `collection`, if it was visited.
    pub fn outcome(&self, collection: &str) -> Option<&SeedOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.collection == collection)
            .map(|entry| &entry.outcome)
    }

    /// Total number of documents inserted across all collections.
    pub fn total_inserted(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| {
                match entry.outcome {
                    SeedOutcome::Seeded {
                        inserted,
                    } => inserted,
                    _ => 0,
                }
            })
            .sum()
    }

    /// Entries whose seeding failed.
    pub fn failures(&self) -> Vec<&SeedEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, SeedOutcome::Failed { .. }))
            .collect()
    }

    /// `true` when no collection was visited, as with a store that does not seed.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub(crate) fn record(&mut self, collection: &str, outcome: SeedOutcome) {
        self.entries.push(SeedEntry {
            collection: collection.to_owned(),
            outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_totals_and_failures() {
        let mut report = SeedReport::default();
        report.record("categories", SeedOutcome::Seeded { inserted: 5 });
        report.record("topics", SeedOutcome::Failed { reason: "boom".to_owned() });
        report.record("posts", SeedOutcome::Skipped { existing: 2 });
        report.record("comments", SeedOutcome::Seeded { inserted: 3 });

        assert_eq!(report.total_inserted(), 8);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].collection, "topics");
        assert_eq!(
            report.outcome("posts"),
            Some(&SeedOutcome::Skipped { existing: 2 })
        );
        assert!(report.outcome("travelGroups").is_none());
    }

    #[test]
    fn test_entry_serializes_flat() {
        let mut report = SeedReport::default();
        report.record("categories", SeedOutcome::Seeded { inserted: 5 });
        report.record("comments", SeedOutcome::NoFixtures);

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"entries": [
                {"collection": "categories", "status": "seeded", "inserted": 5},
                {"collection": "comments", "status": "noFixtures"}
            ]})
        );
    }
}
