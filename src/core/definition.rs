//! Raw automaton definitions as supplied by a caller.
//!
//! A [`Definition`] is the unchecked five-tuple. It becomes an
//! [`Automaton`](super::Automaton) only after passing validation.

use serde::{Deserialize, Serialize};

/// Input token reserved for "the empty string".
///
/// It can never be a member of an alphabet.
pub const EMPTY_STRING: &str = "*";

/// One `(origin, symbol, target)` entry of a transition function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Transition {
    pub origin: String,
    pub symbol: String,
    pub target: String,
}

impl Transition {
    pub fn new(
        origin: impl Into<String>,
        symbol: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }
}

/// Unvalidated five-tuple describing a DFA.
///
/// Lists may contain repeats; they are treated as sets once validated.
/// Transitions are kept as a list so that repeated `(origin, symbol)` pairs
/// can be reported instead of silently overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<Transition>,
    pub start_state: String,
    pub accepting_states: Vec<String>,
}

impl Definition {
    /// Assemble a definition from any string-like collections.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_sim::core::{Definition, Transition};
    ///
    /// let definition = Definition::new(
    ///     ["even", "odd"],
    ///     ["1"],
    ///     [Transition::new("even", "1", "odd"), Transition::new("odd", "1", "even")],
    ///     "even",
    ///     ["even"],
    /// );
    /// assert_eq!(definition.states.len(), 2);
    /// ```
    pub fn new<S, A, T, F>(
        states: S,
        alphabet: A,
        transitions: T,
        start_state: impl Into<String>,
        accepting_states: F,
    ) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        T: IntoIterator<Item = Transition>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            transitions: transitions.into_iter().collect(),
            start_state: start_state.into(),
            accepting_states: accepting_states.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collects_string_like_inputs() {
        let definition = Definition::new(
            vec!["q0".to_string(), "q1".to_string()],
            ["a"],
            [Transition::new("q0", "a", "q1")],
            "q0",
            Vec::<String>::new(),
        );

        assert_eq!(definition.states, vec!["q0", "q1"]);
        assert_eq!(definition.alphabet, vec!["a"]);
        assert_eq!(definition.transitions.len(), 1);
        assert_eq!(definition.start_state, "q0");
        assert!(definition.accepting_states.is_empty());
    }

    #[test]
    fn default_definition_is_empty() {
        let definition = Definition::default();
        assert!(definition.states.is_empty());
        assert!(definition.start_state.is_empty());
    }
}
