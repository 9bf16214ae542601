//! Core automaton model.
//!
//! This module contains the pure core of the simulator:
//! - Raw definitions and the reserved empty-string token
//! - Validation into a compiled, immutable [`Automaton`]
//! - String evaluation with a full trace
//! - Shortest-first language enumeration
//!
//! Nothing here performs I/O or holds process-wide state.

mod automaton;
mod definition;
mod error;
mod evaluation;
mod language;
mod table;
mod validate;

pub use automaton::Automaton;
pub use definition::{Definition, Transition, EMPTY_STRING};
pub use error::{DefinitionError, Field};
pub use evaluation::{Evaluation, Outcome, Step, Trace, Verdict};
pub use language::Words;
pub use table::TransitionTable;
pub use validate::diagnose;
