//! Builder for constructing automata.

use crate::core::{Automaton, Definition, DefinitionError, Transition};

/// Builder for constructing automata with a fluent API.
///
/// Collects a [`Definition`] piece by piece; [`build`](Self::build) runs the
/// usual validation.
///
/// # Example
///
/// ```rust
/// use dfa_sim::builder::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["locked", "open"])
///     .alphabet(["c", "p"])
///     .start("locked")
///     .accepting_state("open")
///     .transition("locked", "c", "open")
///     .transition("open", "p", "locked")
///     .build()
///     .unwrap();
///
/// assert!(automaton.evaluate("c").is_accepted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    definition: Definition,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.definition.states.push(state.into());
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.definition
            .states
            .extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a single input symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.definition.alphabet.push(symbol.into());
        self
    }

    /// Add multiple input symbols at once.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.definition
            .alphabet
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<String>) -> Self {
        self.definition.start_state = state.into();
        self
    }

    /// Mark a state as accepting.
    pub fn accepting_state(mut self, state: impl Into<String>) -> Self {
        self.definition.accepting_states.push(state.into());
        self
    }

    /// Mark multiple states as accepting.
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.definition
            .accepting_states
            .extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition.
    pub fn transition(
        mut self,
        origin: impl Into<String>,
        symbol: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.definition
            .transitions
            .push(Transition::new(origin, symbol, target));
        self
    }

    /// Add multiple pre-built transitions.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.definition.transitions.extend(transitions);
        self
    }

    /// The definition collected so far.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn into_definition(self) -> Definition {
        self.definition
    }

    /// Build the automaton.
    /// Returns the first validation error if the definition is not a DFA.
    pub fn build(self) -> Result<Automaton, DefinitionError> {
        Automaton::define(&self.definition)
    }
}

impl From<Definition> for AutomatonBuilder {
    fn from(definition: Definition) -> Self {
        Self { definition }
    }
}
