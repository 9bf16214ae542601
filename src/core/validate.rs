//! Validation of raw definitions.
//!
//! Rules are checked in a fixed order: token checks, then membership of the
//! start and accepting states, then the reserved symbol, then each
//! transition in the order supplied. [`Automaton::define`](super::Automaton::define)
//! stops at the first violation; [`diagnose`] collects all of them.

use super::definition::{Definition, EMPTY_STRING};
use super::error::{DefinitionError, Field};
use super::table::TransitionTable;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

struct Checker {
    exhaustive: bool,
    found: Vec<DefinitionError>,
}

impl Checker {
    /// Record a violation, or hand it back when failing fast.
    fn report(&mut self, error: DefinitionError) -> Result<(), DefinitionError> {
        if !self.exhaustive {
            return Err(error);
        }
        self.found.push(error);
        Ok(())
    }

    fn tokens<'a>(
        &mut self,
        field: Field,
        tokens: impl IntoIterator<Item = &'a String>,
    ) -> Result<(), DefinitionError> {
        if tokens.into_iter().any(|token| token.is_empty()) {
            self.report(DefinitionError::EmptyToken { field })?;
        }
        Ok(())
    }

    fn run(&mut self, definition: &Definition) -> Result<TransitionTable, DefinitionError> {
        self.tokens(Field::States, &definition.states)?;
        self.tokens(Field::Alphabet, &definition.alphabet)?;
        self.tokens(Field::StartState, [&definition.start_state])?;
        self.tokens(Field::AcceptingStates, &definition.accepting_states)?;

        let states: BTreeSet<&str> = definition.states.iter().map(String::as_str).collect();
        let alphabet: BTreeSet<&str> = definition.alphabet.iter().map(String::as_str).collect();

        if states.is_empty() {
            self.report(DefinitionError::NoStates)?;
        }
        if !states.contains(definition.start_state.as_str()) {
            self.report(DefinitionError::StartNotInStates {
                state: definition.start_state.clone(),
            })?;
        }
        for state in &definition.accepting_states {
            if !states.contains(state.as_str()) {
                self.report(DefinitionError::AcceptingNotInStates {
                    state: state.clone(),
                })?;
            }
        }
        if alphabet.contains(EMPTY_STRING) {
            self.report(DefinitionError::ReservedSymbol {
                symbol: EMPTY_STRING.to_string(),
            })?;
        }

        let mut table = TransitionTable::new();
        for transition in &definition.transitions {
            let mut known = true;
            if !states.contains(transition.origin.as_str()) {
                known = false;
                self.report(DefinitionError::UnknownOrigin {
                    state: transition.origin.clone(),
                })?;
            }
            if !alphabet.contains(transition.symbol.as_str()) {
                known = false;
                self.report(DefinitionError::UnknownSymbol {
                    symbol: transition.symbol.clone(),
                })?;
            }
            if !states.contains(transition.target.as_str()) {
                known = false;
                self.report(DefinitionError::UnknownTarget {
                    state: transition.target.clone(),
                })?;
            }
            if known {
                if let Err(error) = table.insert(transition) {
                    self.report(error)?;
                }
            }
        }

        Ok(table)
    }
}

/// Validate `definition`, stopping at the first broken rule.
///
/// On success returns the compiled transition table.
pub(crate) fn check(definition: &Definition) -> Result<TransitionTable, DefinitionError> {
    let mut checker = Checker {
        exhaustive: false,
        found: Vec::new(),
    };
    checker.run(definition)
}

/// Report every rule `definition` breaks, in checking order.
///
/// Succeeds exactly when [`Automaton::define`](super::Automaton::define)
/// would accept the definition.
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::{diagnose, Definition};
/// use stillwater::validation::Validation;
///
/// let definition = Definition::new(["q0"], ["*"], [], "q1", ["q2"]);
///
/// match diagnose(&definition) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn diagnose(definition: &Definition) -> Validation<(), NonEmptyVec<DefinitionError>> {
    let mut checker = Checker {
        exhaustive: true,
        found: Vec::new(),
    };
    // An exhaustive checker never halts.
    let _ = checker.run(definition);

    if checker.found.is_empty() {
        return Validation::success(());
    }

    let checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = checker
        .found
        .into_iter()
        .map(Validation::fail)
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
