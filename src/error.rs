//! Error types surfaced by the public API.
//!
//! Malformed dictionary records are never represented here — they are
//! skipped silently by the readers in [`crate::dictionary`] per the
//! external-collaborator contract; only configuration, bad lookup
//! parameters, and I/O failures reach the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpellCheckError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid lookup parameter: {0}")]
    LookupParameter(String),

    #[error("dictionary source unreadable: {0}")]
    InputSource(#[from] std::io::Error),

    #[error("dictionary source unreadable: {0}")]
    Csv(#[from] csv::Error),
}
