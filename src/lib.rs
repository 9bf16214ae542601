//! dfa-sim: a deterministic finite automaton simulator
//!
//! The core is a pure model: a definition is validated once into an
//! immutable [`Automaton`], which then evaluates strings and enumerates its
//! language without side effects. File I/O and session state live in thin
//! layers around it.
//!
//! # Core Concepts
//!
//! - **Definition**: the raw five-tuple (states, alphabet, transitions,
//!   start state, accepting states)
//! - **Automaton**: a validated, possibly partial DFA
//! - **Evaluation**: verdict, trace and reason for one input string
//! - **Session**: owns the current automaton and guards operations on it
//!
//! # Example
//!
//! ```rust
//! use dfa_sim::core::{Automaton, Definition, Transition, Verdict};
//!
//! let automaton = Automaton::define(&Definition::new(
//!     ["q0", "q1", "q2"],
//!     ["a", "b"],
//!     [
//!         Transition::new("q0", "a", "q1"),
//!         Transition::new("q0", "b", "q0"),
//!         Transition::new("q1", "a", "q1"),
//!         Transition::new("q1", "b", "q2"),
//!         Transition::new("q2", "a", "q2"),
//!         Transition::new("q2", "b", "q2"),
//!     ],
//!     "q0",
//!     ["q0", "q2"],
//! ))
//! .unwrap();
//!
//! let evaluation = automaton.evaluate("ab");
//! assert_eq!(evaluation.verdict(), Verdict::Accepted);
//! assert_eq!(evaluation.trace.path(), vec!["q0", "q1", "q2"]);
//!
//! assert_eq!(automaton.enumerate_language(3), vec!["*", "b", "ab"]);
//! ```

pub mod builder;
pub mod core;
pub mod persistence;
pub mod report;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use builder::AutomatonBuilder;
pub use crate::core::{Automaton, Definition, DefinitionError, Evaluation, Transition, Verdict};
pub use session::{Session, SessionConfig, SessionError};
