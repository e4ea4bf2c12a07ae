//! Error types for woundsearch
//!
//! Only construction paths can fail: loading a corpus, loading a config file,
//! opening a file-backed history directory. Searching, grouping and suggesting
//! are total functions and never return errors.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for woundsearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for woundsearch
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading a corpus or config file, history directory)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Input rejected by validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two corpus items share an id
    #[error("Duplicate item id: {id}")]
    DuplicateItem {
        /// The repeated id
        id: String,
    },

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::InvalidInput`] from any displayable message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build an [`Error::Config`] from any displayable message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
