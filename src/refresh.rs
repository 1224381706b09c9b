// Refresh Orchestrator + Row Updater
//
// Loads the catalogue, re-scrapes every row, stamps the attempt time, and
// persists the result. A row's failure is logged and contained to that row;
// only store-level failures abort the refresh.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::{Catalogue, ProductRecord, ProductUpdate};
use crate::error::{FetchError, ScrapeError, StorageError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::scrape::ScraperRegistry;
use crate::store::CatalogStore;

/// Outcome of one row's update attempt, aggregated by the orchestrator.
#[derive(Debug)]
pub enum RowOutcome {
    /// Scraper ran and its delta was merged
    Updated,

    /// No scraper registered for this product (coverage gap)
    NoScraper,

    /// Fetch or extraction failed; row left unchanged
    Failed(ScrapeError),
}

pub struct RefreshEngine {
    store: CatalogStore,
    fetcher: Box<dyn PageFetcher>,
    registry: ScraperRegistry,
}

impl RefreshEngine {
    pub fn new(store: CatalogStore, fetcher: Box<dyn PageFetcher>, registry: ScraperRegistry) -> Self {
        RefreshEngine {
            store,
            fetcher,
            registry,
        }
    }

    /// Engine with the real HTTP fetcher and the built-in registry.
    pub fn with_defaults(store: CatalogStore) -> Result<Self, FetchError> {
        Ok(RefreshEngine::new(
            store,
            Box::new(HttpFetcher::new()?),
            ScraperRegistry::new(),
        ))
    }

    /// Read the current catalogue, bootstrapping the store when absent.
    pub fn load_data(&self) -> Result<Catalogue, StorageError> {
        self.store.load()
    }

    /// Full refresh cycle: load, update every row, stamp, persist, return.
    ///
    /// Every record gets its `last_scraped` set to the same instant whether
    /// or not its scrape succeeded; the timestamp marks "refresh was
    /// attempted". Rows are processed sequentially and independently.
    pub fn refresh_data(&self) -> Result<Catalogue, StorageError> {
        let mut catalogue = self.store.load()?;

        let mut updated = 0usize;
        let mut no_scraper = 0usize;
        let mut failed = 0usize;

        for record in &mut catalogue {
            match self.update_row(record) {
                RowOutcome::Updated => {
                    debug!(product = %record.product_name, rate = ?record.interest_rate_pct, "row updated");
                    updated += 1;
                }
                RowOutcome::NoScraper => {
                    debug!(product = %record.product_name, "no scraper registered, row left as is");
                    no_scraper += 1;
                }
                RowOutcome::Failed(_) => {
                    failed += 1;
                }
            }
        }

        let stamp = Utc::now();
        for record in &mut catalogue {
            record.last_scraped = Some(stamp);
        }

        info!(updated, no_scraper, failed, total = catalogue.len(), "refresh complete");

        self.store.persist(&catalogue)?;
        Ok(catalogue)
    }

    /// Update one record from its source page. On any fetch or extraction
    /// failure the record is left exactly as it was.
    fn update_row(&self, record: &mut ProductRecord) -> RowOutcome {
        let Some(scraper) = self.registry.lookup(&record.product_name) else {
            return RowOutcome::NoScraper;
        };

        let attempt: Result<ProductUpdate, ScrapeError> = self
            .fetcher
            .fetch(&record.url)
            .map_err(ScrapeError::from)
            .and_then(|page| scraper(record, &page).map_err(ScrapeError::from));

        match attempt {
            Ok(update) => {
                record.merge(update);
                RowOutcome::Updated
            }
            Err(err) => {
                warn!(product = %record.product_name, error = %err, "scrape failed, keeping previous values");
                RowOutcome::Failed(err)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
