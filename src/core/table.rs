//! Compiled transition function.

use super::definition::Transition;
use super::error::DefinitionError;
use std::collections::BTreeMap;

/// Validated mapping from `(state, symbol)` to exactly one target state.
///
/// Rows are keyed by origin state, and each row is ordered by symbol so that
/// successors are always visited in lexicographic symbol order. A missing
/// entry means the automaton has no move for that pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rows: BTreeMap<String, BTreeMap<String, String>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition.
    ///
    /// Fails with [`DefinitionError::DuplicateTransition`] if the
    /// `(origin, symbol)` pair is already present, regardless of target.
    pub fn insert(&mut self, transition: &Transition) -> Result<(), DefinitionError> {
        let row = self.rows.entry(transition.origin.clone()).or_default();
        if row.contains_key(&transition.symbol) {
            return Err(DefinitionError::DuplicateTransition {
                state: transition.origin.clone(),
                symbol: transition.symbol.clone(),
            });
        }
        row.insert(transition.symbol.clone(), transition.target.clone());
        Ok(())
    }

    /// Look up the target for `(state, symbol)` (pure).
    pub fn get(&self, state: &str, symbol: &str) -> Option<&str> {
        self.rows
            .get(state)
            .and_then(|row| row.get(symbol))
            .map(String::as_str)
    }

    /// Outgoing `(symbol, target)` pairs of `state`, ordered by symbol.
    pub fn successors<'a>(&'a self, state: &str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.rows
            .get(state)
            .into_iter()
            .flat_map(|row| row.iter().map(|(s, t)| (s.as_str(), t.as_str())))
    }

    /// All transitions, ordered by origin then symbol.
    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.rows.iter().flat_map(|(origin, row)| {
            row.iter()
                .map(move |(symbol, target)| Transition::new(origin, symbol, target))
        })
    }

    /// Nested `origin -> symbol -> target` view, as persisted.
    pub fn rows(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.rows
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
