// Error taxonomy for the refresh pipeline
//
// Store-level failures are fatal and propagate to the caller.
// Per-row failures (fetch, extraction) are recovered locally: the row is
// logged and left unchanged, the batch continues.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// STORAGE (fatal)
// ============================================================================

/// Durable store unreadable, corrupt, or unwritable.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("catalogue file {} is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalogue file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write catalogue file {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ============================================================================
// PER-ROW (recovered)
// ============================================================================

/// Network retrieval failed for one product URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Expected pattern absent or unparseable in fetched content.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("pattern '{0}' not found in page text")]
    MissingPattern(String),

    #[error("matched '{0}' but could not parse it as a rate")]
    BadNumber(String),
}

/// Union of the two per-row failure modes, as seen by the row updater.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
}
