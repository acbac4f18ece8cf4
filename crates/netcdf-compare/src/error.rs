//! Error types for NetCDF comparison operations.

use thiserror::Error;

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors that can occur while checking a directory of paired files.
#[derive(Error, Debug)]
pub enum CompareError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference generation tool could not be run or exited non-zero
    #[error("Reference generation failed: {0}")]
    ReferenceGeneration(String),

    /// NetCDF library failed to open a file or read a variable
    #[error("Failed to read NetCDF data: {0}")]
    DatasetRead(String),

    /// The named data variable is absent from a dataset
    #[error("Missing variable: {0}")]
    MissingVariable(String),
}
