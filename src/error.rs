//! Error types for the recuento library.
//!
//! All failures are represented by the [`RecuentoError`] enum. Extraction
//! failures are fatal to the pipeline; export failures are reported by the
//! caller without discarding results that were already computed.
//!
//! # Examples
//!
//! ```
//! use recuento::error::{RecuentoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RecuentoError::extraction("unreadable document"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for recuento operations.
#[derive(Error, Debug)]
pub enum RecuentoError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document extraction errors (unreadable or unparsable source).
    ///
    /// Distinct from an empty document: extracting a document that contains
    /// no text succeeds with an empty string.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Report export errors (writing the results file failed).
    #[error("Export error: {0}")]
    Export(String),

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

/// Result type alias for operations that may fail with RecuentoError.
pub type Result<T> = std::result::Result<T, RecuentoError>;

impl RecuentoError {
    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        RecuentoError::Extraction(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RecuentoError::Analysis(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        RecuentoError::Export(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RecuentoError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RecuentoError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
