//! Error types for the Salvia library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SalviaError`] enum. The parsing and I/O layer is the only fallible
//! surface apart from trie capacity exhaustion; the search itself cannot
//! fail on any input.

use std::io;

use thiserror::Error;

/// The main error type for Salvia operations.
#[derive(Error, Debug)]
pub enum SalviaError {
    /// I/O errors (corpus file missing or unreadable).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed corpus line.
    #[error("{file}, line {line}: {message}")]
    Parse {
        /// Name of the corpus being parsed.
        file: String,
        /// 1-based number of the offending line.
        line: u32,
        /// What went wrong.
        message: String,
    },

    /// Malformed command line flag token or wrong argument arity.
    #[error("Argument error: {0}")]
    Args(String),

    /// The trie ran out of state indices.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
}

/// Result type alias for operations that may fail with [`SalviaError`].
pub type Result<T> = std::result::Result<T, SalviaError>;

impl SalviaError {
    /// Create a new corpus parse error.
    pub fn parse<F: Into<String>, S: Into<String>>(file: F, line: u32, message: S) -> Self {
        SalviaError::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a new argument error.
    pub fn args<S: Into<String>>(msg: S) -> Self {
        SalviaError::Args(msg.into())
    }

    /// Create a new capacity error.
    pub fn capacity_exceeded<S: Into<String>>(msg: S) -> Self {
        SalviaError::CapacityExceeded(msg.into())
    }
}
