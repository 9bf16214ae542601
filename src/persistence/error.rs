//! Persistence error types.

use crate::core::DefinitionError;
use std::path::PathBuf;
use thiserror::Error;

/// Stable classification of a failed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    NotFound,
    Malformed,
    Incomplete,
    Invalid,
    Io,
}

/// Errors that can occur while saving or loading automaton files
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file does not exist
    #[error("File '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    /// The content is not JSON, or a field has the wrong shape
    #[error("File '{}' has an invalid JSON format: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A required field is absent
    #[error("File '{}' is incomplete: missing field '{field}'", path.display())]
    Incomplete { path: PathBuf, field: String },

    /// The file is well-formed but does not describe a valid DFA
    #[error("File '{}' holds an invalid automaton: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DefinitionError,
    },

    /// Reading or writing the file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl PersistenceError {
    /// Which kind of load failure this is.
    ///
    /// Serialization failures only occur on save and report as `Io`.
    pub fn kind(&self) -> LoadFailure {
        match self {
            Self::NotFound { .. } => LoadFailure::NotFound,
            Self::Malformed { .. } => LoadFailure::Malformed,
            Self::Incomplete { .. } => LoadFailure::Incomplete,
            Self::Invalid { .. } => LoadFailure::Invalid,
            Self::Io { .. } | Self::Serialization(_) => LoadFailure::Io,
        }
    }
}
