//! Error types for the lexscore library.
//!
//! All failures are represented by the [`LexScoreError`] enum. Errors are raised
//! synchronously at the point where bad input is detected; no partial result is
//! ever returned alongside an error.
//!
//! Out-of-range precision is not an error: it is clamped by
//! [`Precision::new`](crate::precision::Precision::new).
//!
//! # Examples
//!
//! ```
//! use lexscore::error::{LexScoreError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexScoreError::invalid_input("lexicon must be an object"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::aggregate::Encoding;

/// The main error type for lexscore operations.
#[derive(Error, Debug)]
pub enum LexScoreError {
    /// A required argument is missing or has the wrong shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `frequency` or `percent` encoding was requested without a positive word count.
    #[error("{0} encoding needs a positive word count")]
    MissingWordCount(Encoding),

    /// The encoding name is not one of `raw`, `frequency` or `percent`.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// I/O errors (reading lexicon or token files)
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

/// Result type alias for operations that may fail with LexScoreError.
pub type Result<T> = std::result::Result<T, LexScoreError>;

impl LexScoreError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexScoreError::InvalidInput(msg.into())
    }

    /// Create a new invalid encoding error.
    pub fn invalid_encoding<S: Into<String>>(name: S) -> Self {
        LexScoreError::InvalidEncoding(name.into())
    }

    /// Create a new missing word count error.
    pub fn missing_word_count(encoding: Encoding) -> Self {
        LexScoreError::MissingWordCount(encoding)
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexScoreError::Other(msg.into())
    }
}
