//! Plain-text entry format for definitions.
//!
//! Lists are comma separated (`"q0, q1"`) and transitions are written one
//! per line as `origin symbol target`.

use crate::core::{Definition, Transition};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line}: expected 'origin symbol target', found '{text}'")]
    MalformedTransition { line: usize, text: String },
}

/// Split a comma-separated list, trimming items and dropping blanks.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one transition per line. Blank lines are skipped.
pub fn parse_transitions(text: &str) -> Result<Vec<Transition>, ParseError> {
    let mut transitions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [origin, symbol, target] => {
                transitions.push(Transition::new(*origin, *symbol, *target));
            }
            _ => {
                return Err(ParseError::MalformedTransition {
                    line: index + 1,
                    text: line.trim().to_string(),
                })
            }
        }
    }
    Ok(transitions)
}

/// Assemble a definition from the five text fields.
pub fn parse_definition(
    states: &str,
    alphabet: &str,
    start_state: &str,
    accepting_states: &str,
    transitions: &str,
) -> Result<Definition, ParseError> {
    Ok(Definition {
        states: parse_list(states),
        alphabet: parse_list(alphabet),
        transitions: parse_transitions(transitions)?,
        start_state: start_state.trim().to_string(),
        accepting_states: parse_list(accepting_states),
    })
}

/// Render transitions back into the line format.
pub fn render_transitions(transitions: &[Transition]) -> String {
    transitions
        .iter()
        .map(|t| format!("{} {} {}", t.origin, t.symbol, t.target))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render all five fields, one `name: value` line each, transitions last.
pub fn render_definition(definition: &Definition) -> String {
    format!(
        "states: {}\nalphabet: {}\nstart state: {}\naccepting states: {}\ntransitions:\n{}",
        definition.states.join(", "),
        definition.alphabet.join(", "),
        definition.start_state,
        definition.accepting_states.join(", "),
        render_transitions(&definition.transitions)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::sample_definition;

    #[test]
    fn lists_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_list(" q0, q1 ,, q2 ,"), vec!["q0", "q1", "q2"]);
        assert!(parse_list("  ").is_empty());
    }

    #[test]
    fn transitions_parse_one_per_line() {
        let transitions = parse_transitions("q0 a q1\n\n  q1   b q0  \n").unwrap();

        assert_eq!(
            transitions,
            vec![
                Transition::new("q0", "a", "q1"),
                Transition::new("q1", "b", "q0"),
            ]
        );
    }

    #[test]
    fn wrong_arity_names_the_line() {
        let result = parse_transitions("q0 a q1\nq1 b\n");

        assert_eq!(
            result,
            Err(ParseError::MalformedTransition {
                line: 2,
                text: "q1 b".to_string()
            })
        );
    }

    #[test]
    fn sample_round_trips_through_text() {
        let sample = sample_definition();
        let parsed = parse_definition(
            "q0, q1, q2",
            "a, b",
            " q0 ",
            "q0, q2",
            &render_transitions(&sample.transitions),
        )
        .unwrap();

        assert_eq!(parsed, sample);
    }

    #[test]
    fn render_definition_lists_every_field() {
        let rendered = render_definition(&sample_definition());

        assert!(rendered.starts_with("states: q0, q1, q2\n"));
        assert!(rendered.contains("start state: q0"));
        assert!(rendered.ends_with("q2 b q2"));
    }
}
