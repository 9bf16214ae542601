//! Human-readable narration of an evaluation.

use crate::core::Evaluation;
use std::fmt::Write;

/// Describe the walk taken for `input`, step by step, followed by the
/// verdict and reason.
///
/// # Example
///
/// ```rust
/// use dfa_sim::builder::sample_definition;
/// use dfa_sim::core::Automaton;
/// use dfa_sim::report::narrate;
///
/// let automaton = Automaton::define(&sample_definition()).unwrap();
/// let text = narrate("ab", &automaton.evaluate("ab"));
///
/// assert!(text.contains("3. From state (q1) on symbol 'b' move to state (q2)."));
/// assert!(text.contains("is ACCEPTED"));
/// ```
pub fn narrate(input: &str, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_narration(&mut out, input, evaluation);
    out
}

fn write_narration(out: &mut String, input: &str, evaluation: &Evaluation) -> std::fmt::Result {
    writeln!(out, "Evaluating string: \"{input}\"")?;

    if evaluation.empty_input {
        writeln!(out, "1. The string is empty. The walk has no transitions.")?;
    } else {
        let mut previous: Option<&str> = None;
        for (i, step) in evaluation.trace.steps().iter().enumerate() {
            match (&step.symbol, previous) {
                (Some(symbol), Some(from)) => writeln!(
                    out,
                    "{}. From state ({from}) on symbol '{symbol}' move to state ({}).",
                    i + 1,
                    step.state
                )?,
                _ => writeln!(out, "{}. Starting in state ({}).", i + 1, step.state)?,
            }
            previous = Some(&step.state);
        }
    }

    writeln!(out)?;
    writeln!(out, "Result: the string \"{input}\" is {}.", evaluation.verdict())?;
    write!(out, "Reason: {}", evaluation.reason())
}
