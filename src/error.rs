//! Error types for the sentimen library.
//!
//! All fallible operations return [`Result`], an alias over [`SentimenError`].
//! The numeric core (vectorization, distance, metrics) prefers defined
//! fallback values over errors for arithmetic edge cases; errors are reserved
//! for caller mistakes and I/O at the dataset/CLI boundary.
//!
//! # Examples
//!
//! ```
//! use sentimen::error::{SentimenError, Result};
//!
//! fn check_k(k: usize) -> Result<()> {
//!     if k == 0 {
//!         return Err(SentimenError::invalid_input("k must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_k(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sentimen operations.
#[derive(Error, Debug)]
pub enum SentimenError {
    /// Caller error: inconsistent arguments (mismatched lengths, zero k, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text analysis errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Labeled-corpus loading errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// I/O errors (dataset files, CLI output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentimenError.
pub type Result<T> = std::result::Result<T, SentimenError>;

impl SentimenError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SentimenError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentimenError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SentimenError::Dataset(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentimenError::Other(msg.into())
    }
}
