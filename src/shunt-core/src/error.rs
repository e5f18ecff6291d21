//! Error types for the shunt core.

use std::path::PathBuf;

use thiserror::Error;

/// Faults surfaced by [`VariableStore`](crate::store::VariableStore)
/// backends.
///
/// Unknown names and no-op requests are not errors; they are reported on
/// the feedback channel and never abort a call. `StoreError` is reserved
/// for real faults underneath the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO failure reading or writing persisted state.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data exists but cannot be parsed or rendered.
    #[error("malformed store data in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// No platform data directory could be determined.
    #[error("could not determine a data directory")]
    DataDirNotFound,
}

/// Result type for store-backed operations.
pub type Result<T> = std::result::Result<T, StoreError>;
