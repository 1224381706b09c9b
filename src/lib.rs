// Deposit Radar - Core Library
// Exposes the catalogue refresh pipeline for the CLI and tests

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod refresh;
pub mod scrape;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalogue, ProductRecord, ProductUpdate, RateType};
pub use error::{ExtractionError, FetchError, ScrapeError, StorageError};
pub use fetch::{HttpFetcher, PageContent, PageFetcher};
pub use refresh::{RefreshEngine, RowOutcome};
pub use scrape::{labelled_percent, ScraperFn, ScraperRegistry};
pub use seed::seed_catalogue;
pub use store::CatalogStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
