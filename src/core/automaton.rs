//! The validated automaton and its evaluation walk.

use super::definition::{Definition, Transition, EMPTY_STRING};
use super::error::DefinitionError;
use super::evaluation::{Evaluation, Outcome, Trace};
use super::table::TransitionTable;
use super::validate;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// A well-formed, possibly partial, deterministic finite automaton.
///
/// Instances only exist after a [`Definition`] has passed every validation
/// rule, so the start state and accepting states are always members of the
/// state set and every transition refers to known states and symbols.
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::{Automaton, Definition, Transition, Verdict};
///
/// let automaton = Automaton::define(&Definition::new(
///     ["q0", "q1"],
///     ["a"],
///     [Transition::new("q0", "a", "q1")],
///     "q0",
///     ["q1"],
/// ))
/// .unwrap();
///
/// assert_eq!(automaton.evaluate("a").verdict(), Verdict::Accepted);
/// assert_eq!(automaton.evaluate("aa").verdict(), Verdict::Rejected);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<String>,
    alphabet: BTreeSet<String>,
    table: TransitionTable,
    start_state: String,
    accepting_states: BTreeSet<String>,
}

impl Automaton {
    /// Validate `definition` and compile it into an automaton.
    ///
    /// Fails on the first broken rule. Nothing is produced on failure, so a
    /// caller holding a previous automaton keeps it unchanged.
    pub fn define(definition: &Definition) -> Result<Self, DefinitionError> {
        let table = validate::check(definition).inspect_err(|error| {
            warn!("rejected automaton definition: {error}");
        })?;

        let automaton = Self {
            states: definition.states.iter().cloned().collect(),
            alphabet: definition.alphabet.iter().cloned().collect(),
            table,
            start_state: definition.start_state.clone(),
            accepting_states: definition.accepting_states.iter().cloned().collect(),
        };
        debug!(
            states = automaton.states.len(),
            symbols = automaton.alphabet.len(),
            transitions = automaton.table.len(),
            "defined automaton starting in {}",
            automaton.start_state
        );
        Ok(automaton)
    }

    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    pub fn alphabet(&self) -> &BTreeSet<String> {
        &self.alphabet
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    pub fn accepting_states(&self) -> &BTreeSet<String> {
        &self.accepting_states
    }

    /// Check if `state` is accepting (pure).
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting_states.contains(state)
    }

    /// Reconstruct the five-tuple this automaton was built from.
    ///
    /// Sets come back sorted and transitions ordered by origin then symbol.
    pub fn definition(&self) -> Definition {
        Definition {
            states: self.states.iter().cloned().collect(),
            alphabet: self.alphabet.iter().cloned().collect(),
            transitions: self.table.iter().collect::<Vec<Transition>>(),
            start_state: self.start_state.clone(),
            accepting_states: self.accepting_states.iter().cloned().collect(),
        }
    }

    /// Run `input` through the automaton.
    ///
    /// Each character of `input` is one symbol. The sentinel [`EMPTY_STRING`]
    /// evaluates the empty string: it is accepted iff the start state is
    /// accepting, and its trace is the start state alone.
    pub fn evaluate(&self, input: &str) -> Evaluation {
        if input == EMPTY_STRING {
            let outcome = if self.is_accepting(&self.start_state) {
                Outcome::Accepted {
                    state: self.start_state.clone(),
                }
            } else {
                Outcome::NotAccepting {
                    state: self.start_state.clone(),
                }
            };
            return Evaluation {
                outcome,
                trace: Trace::starting_at(self.start_state.as_str()),
                empty_input: true,
            };
        }

        self.evaluate_symbols(input.chars().map(String::from))
    }

    /// Run an already tokenized sequence of symbols through the automaton.
    ///
    /// Unlike [`evaluate`](Self::evaluate) this treats an empty sequence as
    /// the empty string and gives `"*"` no special meaning.
    pub fn evaluate_symbols<I>(&self, symbols: I) -> Evaluation
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current = self.start_state.as_str();
        let mut trace = Trace::starting_at(current);

        for symbol in symbols {
            let symbol = symbol.as_ref();
            if !self.alphabet.contains(symbol) {
                trace!("symbol '{symbol}' is not in the alphabet");
                return Evaluation {
                    outcome: Outcome::UnknownSymbol {
                        state: current.to_string(),
                        symbol: symbol.to_string(),
                    },
                    trace,
                    empty_input: false,
                };
            }

            let Some(next) = self.table.get(current, symbol) else {
                trace!("no transition from {current} on '{symbol}'");
                return Evaluation {
                    outcome: Outcome::NoTransition {
                        state: current.to_string(),
                        symbol: symbol.to_string(),
                    },
                    trace,
                    empty_input: false,
                };
            };

            trace!("{current} --{symbol}--> {next}");
            trace.push(next, symbol);
            current = next;
        }

        let state = current.to_string();
        let outcome = if self.is_accepting(current) {
            Outcome::Accepted { state }
        } else {
            Outcome::NotAccepting { state }
        };
        Evaluation {
            outcome,
            trace,
            empty_input: false,
        }
    }
}
