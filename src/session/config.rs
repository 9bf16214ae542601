//! Session configuration.

use serde::{Deserialize, Serialize};

/// Number of strings listed by [`Session::enumerate`](super::Session::enumerate)
/// unless configured otherwise.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 10;

/// Tunables for a [`Session`](super::Session).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How many accepted strings `enumerate` lists.
    pub enumeration_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enumeration_limit: DEFAULT_ENUMERATION_LIMIT,
        }
    }
}

impl SessionConfig {
    pub fn with_enumeration_limit(mut self, limit: usize) -> Self {
        self.enumeration_limit = limit;
        self
    }
}
