//! Saving and loading automata as JSON files.
//!
//! The on-disk format is a single object with five fields:
//!
//! ```json
//! {
//!     "states": ["q0", "q1"],
//!     "alphabet": ["a"],
//!     "start_state": "q0",
//!     "accepting_states": ["q1"],
//!     "transitions": { "q0": { "a": "q1" } }
//! }
//! ```
//!
//! Sets are written sorted. Loading validates the content exactly as
//! [`Automaton::define`] does.

use crate::core::{Automaton, Definition, Transition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

pub mod error;

pub use error::{LoadFailure, PersistenceError};

/// Fields every automaton file must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "states",
    "alphabet",
    "start_state",
    "accepting_states",
    "transitions",
];

/// Serializable form of an automaton, matching the file schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonFile {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub start_state: String,
    pub accepting_states: Vec<String>,
    /// origin -> symbol -> target
    pub transitions: BTreeMap<String, BTreeMap<String, String>>,
}

impl From<&Automaton> for AutomatonFile {
    fn from(automaton: &Automaton) -> Self {
        Self {
            states: automaton.states().iter().cloned().collect(),
            alphabet: automaton.alphabet().iter().cloned().collect(),
            start_state: automaton.start_state().to_string(),
            accepting_states: automaton.accepting_states().iter().cloned().collect(),
            transitions: automaton.transitions().rows().clone(),
        }
    }
}

impl From<AutomatonFile> for Definition {
    fn from(file: AutomatonFile) -> Self {
        let transitions = file
            .transitions
            .iter()
            .flat_map(|(origin, row)| {
                row.iter()
                    .map(move |(symbol, target)| Transition::new(origin, symbol, target))
            })
            .collect();
        Self {
            states: file.states,
            alphabet: file.alphabet,
            transitions,
            start_state: file.start_state,
            accepting_states: file.accepting_states,
        }
    }
}

/// Name reported in errors for JSON that did not come from a file.
pub const INLINE_SOURCE: &str = "<inline>";

/// Render `automaton` as pretty-printed JSON.
pub fn to_json(automaton: &Automaton) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(&AutomatonFile::from(automaton))
        .map_err(|e| PersistenceError::Serialization(e.to_string()))
}

fn parse_from(path: &Path, json: &str) -> Result<Definition, PersistenceError> {
    let malformed = |reason: String| PersistenceError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;

    let Some(object) = value.as_object() else {
        return Err(malformed(
            "expected a JSON object at the top level".to_string(),
        ));
    };
    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(PersistenceError::Incomplete {
            path: path.to_path_buf(),
            field: field.to_string(),
        });
    }

    let file: AutomatonFile =
        serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
    Ok(file.into())
}

fn compile(path: &Path, definition: &Definition) -> Result<Automaton, PersistenceError> {
    Automaton::define(definition).map_err(|source| PersistenceError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse JSON into the raw five-tuple without validating it.
///
/// Distinguishes malformed content from a missing field. Errors name
/// [`INLINE_SOURCE`] as their path.
pub fn parse_definition(json: &str) -> Result<Definition, PersistenceError> {
    parse_from(Path::new(INLINE_SOURCE), json)
}

/// Parse and validate an automaton from JSON.
pub fn from_json(json: &str) -> Result<Automaton, PersistenceError> {
    let path = Path::new(INLINE_SOURCE);
    compile(path, &parse_from(path, json)?)
}

/// Write `automaton` to `path`.
///
/// Writes to a temporary sibling file first and renames it into place, so a
/// failed save never leaves a truncated file behind.
pub fn save(path: impl AsRef<Path>, automaton: &Automaton) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let json = to_json(automaton)?;

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");

    let io_error = |source: io::Error| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&temp_path, json).map_err(io_error)?;
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(source));
    }

    info!("saved automaton to {}", path.display());
    Ok(())
}

/// Read the raw contents of `path`, reporting a missing file as
/// [`PersistenceError::NotFound`].
pub fn read(path: impl AsRef<Path>) -> Result<String, PersistenceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PersistenceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read the five-tuple stored at `path` without validating it.
pub fn load_definition(path: impl AsRef<Path>) -> Result<Definition, PersistenceError> {
    let path = path.as_ref();
    parse_from(path, &read(path)?)
}

/// Read and validate an automaton from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Automaton, PersistenceError> {
    let path = path.as_ref();
    let result = load_definition(path).and_then(|definition| compile(path, &definition));

    match &result {
        Ok(_) => info!("loaded automaton from {}", path.display()),
        Err(error) => warn!("failed to load {}: {error}", path.display()),
    }
    result
}
