//! Results of running an input string through an automaton.
//!
//! Rejection is data, not failure: every way a string can be rejected is an
//! [`Outcome`] variant paired with the trace walked so far.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final answer for one input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("ACCEPTED"),
            Self::Rejected => f.write_str("REJECTED"),
        }
    }
}

/// Why an evaluation ended the way it did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All input consumed and the final state is accepting.
    Accepted { state: String },

    /// An input symbol is not part of the alphabet.
    UnknownSymbol { state: String, symbol: String },

    /// The current state has no move on the next symbol.
    NoTransition { state: String, symbol: String },

    /// All input consumed but the final state is not accepting.
    NotAccepting { state: String },
}

impl Outcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Accepted { .. } => Verdict::Accepted,
            _ => Verdict::Rejected,
        }
    }

    /// State the walk stopped in.
    pub fn state(&self) -> &str {
        match self {
            Self::Accepted { state }
            | Self::UnknownSymbol { state, .. }
            | Self::NoTransition { state, .. }
            | Self::NotAccepting { state } => state,
        }
    }

    /// True when the walk stopped before consuming all input.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::UnknownSymbol { .. } | Self::NoTransition { .. })
    }
}

/// One visited state and the symbol consumed to enter it.
///
/// The first step of every trace has no symbol: it is the start state
/// before any input is read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub state: String,
    pub symbol: Option<String>,
}

/// Ordered record of every state visited during an evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Start a trace in `state`.
    pub fn starting_at(state: impl Into<String>) -> Self {
        Self {
            steps: vec![Step {
                state: state.into(),
                symbol: None,
            }],
        }
    }

    pub(crate) fn push(&mut self, state: impl Into<String>, symbol: impl Into<String>) {
        self.steps.push(Step {
            state: state.into(),
            symbol: Some(symbol.into()),
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// States visited, in order.
    pub fn path(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.state.as_str()).collect()
    }

    /// The state the trace currently ends in.
    pub fn last_state(&self) -> &str {
        // A trace always holds at least its start step.
        self.steps
            .last()
            .map(|step| step.state.as_str())
            .unwrap_or_default()
    }

    /// Number of visited states, including the start state.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Verdict, trace and reason for one evaluated input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub trace: Trace,
    /// The input was the empty-string sentinel.
    pub empty_input: bool,
}

impl Evaluation {
    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict()
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict() == Verdict::Accepted
    }

    /// Human-readable explanation of the outcome.
    pub fn reason(&self) -> String {
        match (&self.outcome, self.empty_input) {
            (Outcome::Accepted { .. }, true) => {
                "The empty string is accepted because the start state is accepting.".to_string()
            }
            (Outcome::NotAccepting { .. }, true) => {
                "The empty string is rejected because the start state is not accepting."
                    .to_string()
            }
            (Outcome::UnknownSymbol { symbol, .. }, _) => {
                format!("Symbol '{symbol}' is not in the alphabet.")
            }
            (Outcome::NoTransition { state, symbol }, _) => {
                format!("Halted: no transition defined from state '{state}' on symbol '{symbol}'.")
            }
            (Outcome::Accepted { state }, false) => {
                format!("Finished. Final state '{state}' is an accepting state.")
            }
            (Outcome::NotAccepting { state }, false) => {
                format!("Finished. Final state '{state}' is NOT an accepting state.")
            }
        }
    }
}
