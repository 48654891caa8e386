// crates/nglga-core/src/error.rs

//! Error type shared by the loader and the exporters.
//!
//! Lookups never fail: an unknown state yields an empty slice and an unknown
//! LGA yields `None`. Only construction and exports produce an [`LgaError`].

use thiserror::Error;

/// Everything that can go wrong while loading or exporting the dataset.
#[derive(Debug, Error)]
pub enum LgaError {
    /// The dataset file does not exist at the resolved path.
    #[error("{0}")]
    NotFound(String),

    /// The dataset exists but is not an object of state → array of LGA names.
    #[error("malformed dataset: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LgaError>;
