//! Session facade around a single automaton.
//!
//! A [`Session`] owns at most one [`Automaton`]. Operations that need an
//! automaton refuse with [`SessionError::NoAutomaton`] until one has been
//! defined or loaded. A failed `define` or `load` leaves the current
//! automaton untouched.
//!
//! Sessions hold no shared state, so a server can keep one per connection.

use crate::core::{Automaton, Definition, Evaluation};
use crate::persistence;
use std::fmt;
use std::path::Path;
use tracing::debug;

pub mod config;
pub mod error;

pub use config::{SessionConfig, DEFAULT_ENUMERATION_LIMIT};
pub use error::SessionError;

/// Accepted strings listed by [`Session::enumerate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    words: Vec<String>,
}

impl Enumeration {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accepted strings:")?;
        for word in &self.words {
            write!(f, "\n{word}")?;
        }
        Ok(())
    }
}

/// Holds the current automaton and guards operations on it.
///
/// # Example
///
/// ```rust
/// use dfa_sim::builder::sample_definition;
/// use dfa_sim::session::{Session, SessionError};
///
/// let mut session = Session::new();
/// assert!(matches!(session.evaluate("ab"), Err(SessionError::NoAutomaton)));
///
/// session.define(&sample_definition()).unwrap();
/// assert!(session.evaluate("ab").unwrap().is_accepted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    automaton: Option<Automaton>,
    config: SessionConfig,
}

impl Session {
    /// Create a session with no automaton and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            automaton: None,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current automaton, if one is defined (pure).
    pub fn automaton(&self) -> Option<&Automaton> {
        self.automaton.as_ref()
    }

    pub fn is_defined(&self) -> bool {
        self.automaton.is_some()
    }

    fn current(&self) -> Result<&Automaton, SessionError> {
        self.automaton.as_ref().ok_or(SessionError::NoAutomaton)
    }

    /// Replace the current automaton with a validated `definition`.
    ///
    /// On failure the previous automaton, or its absence, is kept.
    pub fn define(&mut self, definition: &Definition) -> Result<&Automaton, SessionError> {
        let automaton = Automaton::define(definition)?;
        debug!("session automaton replaced by definition");
        Ok(&*self.automaton.insert(automaton))
    }

    /// Evaluate `input` against the current automaton.
    pub fn evaluate(&self, input: &str) -> Result<Evaluation, SessionError> {
        Ok(self.current()?.evaluate(input))
    }

    /// List the configured number of shortest accepted strings.
    pub fn enumerate(&self) -> Result<Enumeration, SessionError> {
        self.enumerate_up_to(self.config.enumeration_limit)
    }

    /// List at most `limit` shortest accepted strings.
    pub fn enumerate_up_to(&self, limit: usize) -> Result<Enumeration, SessionError> {
        let words = self.current()?.enumerate_language(limit);
        Ok(Enumeration { words })
    }

    /// Write the current automaton to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        persistence::save(path, self.current()?)?;
        Ok(())
    }

    /// Replace the current automaton with the one stored at `path`.
    ///
    /// Returns the reloaded five-tuple for display. On failure the current
    /// automaton is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Definition, SessionError> {
        let automaton = persistence::load(path)?;
        let definition = automaton.definition();
        self.automaton = Some(automaton);
        Ok(definition)
    }
}
