#[cfg(test)]
mod tests {
    use futures::future::join_all;
    use serde_json::json;

    use crate::{
        constants::{CATEGORIES, COMMENTS, SEED_ORDER},
        seed::{SeedOutcome, Seeder},
        Filter,
        Store,
        StoreConfig,
        StoreError,
    };

    async fn counts(store: &Store) -> Vec<(String, u64)> {
        store
            .stats()
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.name, s.documents))
            .collect()
    }

    #[tokio::test]
    async fn test_new_store_is_empty_and_disconnected() {
        let store = Store::new();

        assert!(!store.is_connected());
        assert!(store.collection_names().unwrap().is_empty());
        assert_eq!(
            store
                .collection(CATEGORIES)
                .count_documents(&Filter::new())
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_initialize_seeds_all_collections() {
        let store = Store::new();
        let report = store.initialize().await;

        assert!(store.is_connected());
        assert!(report.failures().is_empty());
        let mut names = store.collection_names().unwrap();
        names.sort();
        let mut expected = SEED_ORDER.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let store = Store::new();
        let first = store.initialize().await;
        let before = counts(&store).await;

        let second = store.initialize().await;
        assert_eq!(first, second);
        assert_eq!(counts(&store).await, before);

        let fresh_run = Seeder::new().run(&store).await;
        assert_eq!(fresh_run.total_inserted(), 0);
        assert!(fresh_run
            .entries()
            .iter()
            .all(|e| matches!(e.outcome, SeedOutcome::Skipped { .. })));
        assert_eq!(counts(&store).await, before);
    }

    #[tokio::test]
    async fn test_concurrent_initialize_seeds_once() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let store = Store::new();

        let reports = join_all((0 .. 8).map(|_| {
            let store = store.clone();
            async move { store.connect().await }
        }))
        .await;

        assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(
            store
                .collection(CATEGORIES)
                .count_documents(&Filter::new())
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_initialize_on_multithreaded_runtime() {
        let store = Store::new();

        let handles = (0 .. 4)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.initialize().await })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(
            store
                .collection(CATEGORIES)
                .count_documents(&Filter::new())
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test]
    async fn test_unseeded_store_stays_empty() {
        let store = Store::with_config(StoreConfig::unseeded()).unwrap();
        let report = store.initialize().await;

        assert!(report.is_empty());
        assert!(store.is_connected());
        assert!(store.collection_names().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = StoreConfig {
            id_length: Some(1),
            ..StoreConfig::default()
        };
        let err = Store::with_config(config).unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));
    }

    #[tokio::test]
    async fn test_id_length_applies_to_generated_ids() {
        let config = StoreConfig {
            id_length: Some(10),
            ..StoreConfig::unseeded()
        };
        let store = Store::with_config(config).unwrap();
        let inserted = store
            .collection("posts")
            .insert_one(json!({"title": "Short ids"}))
            .await
            .unwrap();
        assert_eq!(inserted.inserted_id.len(), 10);
    }

    #[tokio::test]
    async fn test_every_seeded_document_has_aligned_ids() {
        let store = Store::new();
        store.initialize().await;

        for name in store.collection_names().unwrap() {
            for doc in store.collection(&name).find(&Filter::new()).await.unwrap() {
                assert!(doc.id().is_some());
                assert_eq!(doc["_id"], doc["id"]);
            }
        }
    }

    #[tokio::test]
    async fn test_seeded_comments_exist() {
        let store = Store::new();
        let report = store.initialize().await;

        assert!(matches!(
            report.outcome(COMMENTS),
            Some(SeedOutcome::Seeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_end_to_end_category_lifecycle() {
        let store = Store::new();
        let categories = store.collection(CATEGORIES);

        store.initialize().await;
        assert_eq!(categories.count_documents(&Filter::new()).await.unwrap(), 5);

        store.initialize().await;
        assert_eq!(categories.count_documents(&Filter::new()).await.unwrap(), 5);

        categories.insert_one(json!({"name": "Test"})).await.unwrap();
        assert_eq!(categories.count_documents(&Filter::new()).await.unwrap(), 6);

        let deleted = categories
            .delete_one(&Filter::new().with("name", "Test"))
            .await
            .unwrap();
        assert_eq!(deleted.deleted_count, 1);
        assert_eq!(categories.count_documents(&Filter::new()).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_stats_reports_counts() {
        let store = Store::with_config(StoreConfig::unseeded()).unwrap();
        store.collection("b").insert_one(json!({})).await.unwrap();
        store.collection("a").insert_one(json!({})).await.unwrap();
        store.collection("a").insert_one(json!({})).await.unwrap();

        assert_eq!(
            counts(&store).await,
            vec![("a".to_owned(), 2), ("b".to_owned(), 1)]
        );
    }
}
