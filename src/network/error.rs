//! Errors surfaced by the network manager

use thiserror::Error;

/// Errors that can occur in network operations
///
/// Missing profiles and duplicate names are not errors; they are reported
/// as `false`, `None` or empty results.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;
