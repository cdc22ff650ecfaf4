//! Error types for coverage access.

use thiserror::Error;

/// Errors raised while opening a dataset.
///
/// A dataset that opens cleanly but contains no grids is not an error;
/// see [`crate::resolver::Resolution::Empty`].
#[derive(Error, Debug)]
pub enum CoverageError {
    /// File-system failure underneath a local open.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The format backend could not open or understand the dataset.
    #[error("Failed to open dataset: {0}")]
    Backend(String),

    /// Connection or protocol failure on a remote open.
    #[error("Remote access failed: {0}")]
    Remote(String),
}

/// Result type for coverage operations.
pub type CoverageResult<T> = std::result::Result<T, CoverageError>;
