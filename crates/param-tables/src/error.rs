//! Error types for the param-tables crate.

use thiserror::Error;

/// Errors raised while building or loading parameter tables.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table definition: {0}")]
    InvalidConfig(String),

    #[error("Duplicate parameter code: {0}")]
    DuplicateParameter(String),
}

/// A unit string the compatibility oracle could not parse.
///
/// Local to a single comparison: reconciliation converts it into a
/// mismatch record instead of propagating it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse unit: {0}")]
pub struct UnitParseError(pub String);

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
