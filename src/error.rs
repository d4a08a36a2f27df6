//! Error types for dictionary operations.

use alloc::string::String;

use thiserror::Error;

/// Result type for dictionary operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the mutating dictionary operations.
///
/// Lookups (`get`, `successor`, `predecessor`, `smallest`, `largest`,
/// `prefix_scan`) never fail; a miss is an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An entry with an equal key is already present. The tree is unchanged.
    #[error("a record with the same key already exists")]
    DuplicateKey,

    /// No entry with the requested key is present.
    #[error("key not found in the dictionary")]
    KeyNotFound,

    /// A removal was attempted on a dictionary with no entries.
    #[error("dictionary is empty")]
    Empty,

    /// Seed text ended after a label, or paired a label with a blank data line.
    #[error("malformed seed text at line {line}")]
    MalformedSeed {
        /// One-based number of the dangling label or the blank data line.
        line: usize,
    },

    /// A command line could not be parsed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

impl Error {
    /// Create an invalid command error
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }
}
