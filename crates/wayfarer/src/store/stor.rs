use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;
use tracing::{debug, info, trace};

use crate::{seed::Seeder, table::DocumentTable, Collection, Result, SeedReport, StoreConfig};
use super::operations::{collection, collection_names, stats, CollectionStats};

/// The in-memory mock document store.
///
/// `Store` is a cheap handle: clones share one document table, one
/// configuration and one memoized initialization. Create a store once at
/// startup and hand clones to whatever needs data access.
///
/// Nothing is persisted. A fresh store is empty until [`Store::initialize`]
/// seeds it.
///
/// # Examples
///
/// ```rust
/// use wayfarer_store::{Filter, Store};
///
/// # async fn example() -> wayfarer_store::Result<()> {
/// let store = Store::new();
/// store.initialize().await;
///
/// let categories = store.collection("categories");
/// assert_eq!(categories.count_documents(&Filter::new()).await?, 5);
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// `Store` is `Send + Sync`. The document table is guarded by a lock that is
/// only held inside synchronous sections, never across an `.await`.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    /// Collections and their documents.
    table:          DocumentTable,
    /// Effective configuration.
    config:         StoreConfig,
    /// Plan run by the first `initialize()` call.
    seeder:         Seeder,
    /// Memoized result of the first `initialize()` call.
    initialization: OnceCell<SeedReport>,
    /// Set once `initialize()` has started.
    connected:      AtomicBool,
    /// When the store was created.
    created_at:     DateTime<Utc>,
}

impl Default for Store {
    fn default() -> Self { Self::new() }
}

impl Store {
    /// Creates an empty store with the default configuration and seeding plan.
    pub fn new() -> Self { Self::build(StoreConfig::default(), Seeder::default()) }

    /// Creates an empty store with a custom configuration.
    ///
    /// # Returns
    ///
    /// Returns `StoreError::Config` when the configuration is invalid.
    pub fn with_config(config: StoreConfig) -> Result<Self> { Self::with_seeder(config, Seeder::default()) }

    /// Creates an empty store with a custom configuration and seeding plan.
    pub fn with_seeder(config: StoreConfig, seeder: Seeder) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seeder))
    }

    fn build(config: StoreConfig, seeder: Seeder) -> Self {
        trace!("Creating store with config {:?}", config);
        Self {
            inner: Arc::new(StoreInner {
                table: DocumentTable::new(),
                config,
                seeder,
                initialization: OnceCell::new(),
                connected: AtomicBool::new(false),
                created_at: Utc::now(),
            }),
        }
    }

    /// Connects the store and seeds it on first use.
    ///
    /// The first call marks the store connected and, when
    /// `seed_on_connect` is set, runs the seeder. Concurrent callers wait for
    /// that same run; later callers get its report immediately. Seeding
    /// failures are logged and reported, never returned as errors.
    ///
    /// # Returns
    ///
    /// Returns the report of the one seeding run. A store configured not to
    /// seed returns an empty report.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wayfarer_store::Store;
    ///
    /// # async fn example() {
    /// let store = Store::new();
    /// let first = store.initialize().await;
    /// let second = store.clone().initialize().await;
    /// assert_eq!(first, second);
    /// assert!(store.is_connected());
    /// # }
    /// ```
    pub async fn initialize(&self) -> SeedReport {
        trace!("Initializing store");
        let report = self
            .inner
            .initialization
            .get_or_init(|| {
                async move {
                    self.inner.connected.store(true, Ordering::SeqCst);
                    info!("Store connected");
                    if self.inner.config.seed_on_connect {
                        self.inner.seeder.run(self).await
                    }
                    else {
                        debug!("Seeding disabled by configuration");
                        SeedReport::default()
                    }
                }
            })
            .await;
        report.clone()
    }

    /// Alias of [`Store::initialize`].
    pub async fn connect(&self) -> SeedReport { self.initialize().await }

    /// `true` once `initialize()` or `connect()` has been called.
    pub fn is_connected(&self) -> bool { self.inner.connected.load(Ordering::SeqCst) }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig { &self.inner.config }

    /// Returns when the store was created.
    pub fn created_at(&self) -> DateTime<Utc> { self.inner.created_at }

    /// Returns a handle to the named collection.
    ///
    /// The collection does not need to exist; it is created by its first
    /// insert.
    pub fn collection(&self, name: &str) -> Collection { collection(self, name) }

    /// Returns the names of all collections created so far, sorted.
    pub fn collection_names(&self) -> Result<Vec<String>> { collection_names(self) }

    /// Returns the number of documents in every collection.
    pub async fn stats(&self) -> Result<Vec<CollectionStats>> { stats(self).await }

    pub(crate) fn table(&self) -> &DocumentTable { &self.inner.table }
}
