//! Definition errors raised while validating an automaton.

use std::fmt;
use thiserror::Error;

/// The part of a definition a token was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    States,
    Alphabet,
    StartState,
    AcceptingStates,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::States => "states",
            Self::Alphabet => "alphabet",
            Self::StartState => "start state",
            Self::AcceptingStates => "accepting states",
        };
        f.write_str(name)
    }
}

/// Errors that make a definition an ill-formed DFA.
///
/// Each variant names the rule that was broken and carries the offending
/// value. A definition that produces any of these is never installed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Empty token in {field}; every element must be non-empty text")]
    EmptyToken { field: Field },

    #[error("No states defined. An automaton needs at least one state")]
    NoStates,

    #[error("Start state '{state}' is not one of the defined states")]
    StartNotInStates { state: String },

    #[error("Accepting state '{state}' is not one of the defined states")]
    AcceptingNotInStates { state: String },

    #[error("Symbol '{symbol}' is reserved for the empty string and cannot be in the alphabet")]
    ReservedSymbol { symbol: String },

    #[error("Transition origin '{state}' is not a defined state")]
    UnknownOrigin { state: String },

    #[error("Transition symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: String },

    #[error("Transition target '{state}' is not a defined state")]
    UnknownTarget { state: String },

    #[error("Duplicate transition for state '{state}' on symbol '{symbol}'")]
    DuplicateTransition { state: String, symbol: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let error = DefinitionError::StartNotInStates {
            state: "q9".to_string(),
        };
        assert!(error.to_string().contains("'q9'"));

        let error = DefinitionError::DuplicateTransition {
            state: "q0".to_string(),
            symbol: "a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate transition for state 'q0' on symbol 'a'"
        );
    }

    #[test]
    fn empty_token_names_the_field() {
        let error = DefinitionError::EmptyToken {
            field: Field::AcceptingStates,
        };
        assert!(error.to_string().contains("accepting states"));
    }
}
