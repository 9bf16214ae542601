//! Session error types.

use crate::core::DefinitionError;
use crate::persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by a [`Session`](super::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    /// Evaluate, enumerate and save need an automaton first
    #[error("No automaton defined. Define or load an automaton first")]
    NoAutomaton,

    #[error("Error defining automaton: {0}")]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
