//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating automata with minimal boilerplate. Both go through the same
//! validation as [`Automaton::define`](crate::core::Automaton::define).

pub mod automaton;
pub mod macros;

pub use automaton::AutomatonBuilder;

use crate::core::Definition;

/// The bundled sample automaton.
///
/// Over `{a, b}`: accepts every string with no `a`, and every string
/// containing `ab`. Start state `q0`, accepting states `q0` and `q2`.
///
/// # Example
///
/// ```
/// use dfa_sim::builder::sample_definition;
/// use dfa_sim::core::Automaton;
///
/// let automaton = Automaton::define(&sample_definition()).unwrap();
/// assert!(automaton.evaluate("bb").is_accepted());
/// assert!(!automaton.evaluate("ba").is_accepted());
/// ```
pub fn sample_definition() -> Definition {
    AutomatonBuilder::new()
        .states(["q0", "q1", "q2"])
        .alphabet(["a", "b"])
        .start("q0")
        .accepting(["q0", "q2"])
        .transition("q0", "a", "q1")
        .transition("q0", "b", "q0")
        .transition("q1", "a", "q1")
        .transition("q1", "b", "q2")
        .transition("q2", "a", "q2")
        .transition("q2", "b", "q2")
        .into_definition()
}
