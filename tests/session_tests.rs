//! End-to-end tests of the session facade on the bundled sample automaton.

use dfa_sim::builder::sample_definition;
use dfa_sim::core::{Outcome, Verdict, EMPTY_STRING};
use dfa_sim::persistence::LoadFailure;
use dfa_sim::session::{Session, SessionError};
use dfa_sim::text::{parse_definition, render_transitions};
use std::fs;

fn defined_session() -> Session {
    let mut session = Session::new();
    session.define(&sample_definition()).unwrap();
    session
}

#[test]
fn sample_automaton_verdicts() {
    let session = defined_session();

    let bb = session.evaluate("bb").unwrap();
    assert_eq!(bb.verdict(), Verdict::Accepted);
    assert_eq!(bb.trace.path(), vec!["q0", "q0", "q0"]);

    let a = session.evaluate("a").unwrap();
    assert_eq!(a.verdict(), Verdict::Rejected);
    assert_eq!(a.trace.last_state(), "q1");

    let ab = session.evaluate("ab").unwrap();
    assert_eq!(ab.verdict(), Verdict::Accepted);
    assert_eq!(ab.trace.path(), vec!["q0", "q1", "q2"]);

    let empty = session.evaluate(EMPTY_STRING).unwrap();
    assert_eq!(empty.verdict(), Verdict::Accepted);
    assert_eq!(empty.trace.path(), vec!["q0"]);

    let ac = session.evaluate("ac").unwrap();
    assert_eq!(ac.verdict(), Verdict::Rejected);
    assert!(matches!(ac.outcome, Outcome::UnknownSymbol { .. }));
    assert_eq!(ac.trace.path(), vec!["q0", "q1"]);
}

#[test]
fn sample_automaton_enumeration() {
    let session = defined_session();

    let words = session.enumerate_up_to(5).unwrap().into_words();
    assert_eq!(words, vec!["*", "b", "ab", "bb", "aab"]);

    let default = session.enumerate().unwrap();
    assert_eq!(default.len(), 10);
    assert_eq!(&default.words()[..5], words.as_slice());
}

#[test]
fn nothing_works_before_define() {
    let session = Session::new();

    assert!(matches!(session.evaluate("a"), Err(SessionError::NoAutomaton)));
    assert!(matches!(session.enumerate(), Err(SessionError::NoAutomaton)));
}

#[test]
fn definition_from_text_entry() {
    let sample = sample_definition();
    let definition = parse_definition(
        "q0, q1, q2",
        "a, b",
        "q0",
        "q0, q2",
        &render_transitions(&sample.transitions),
    )
    .unwrap();

    let mut session = Session::new();
    session.define(&definition).unwrap();
    assert!(session.evaluate("bab").unwrap().is_accepted());
}

#[test]
fn zero_states_cannot_be_defined() {
    let definition = parse_definition("", "a", "q0", "", "").unwrap();
    let mut session = Session::new();

    assert!(matches!(
        session.define(&definition),
        Err(SessionError::Definition(_))
    ));
    assert!(!session.is_defined());
}

#[test]
fn save_load_preserves_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    let original = defined_session();
    original.save(&path).unwrap();

    let mut restored = Session::new();
    let definition = restored.load(&path).unwrap();
    assert_eq!(definition.accepting_states, vec!["q0", "q2"]);

    for input in ["*", "a", "ab", "ba", "bbb", "abab", "ac"] {
        assert_eq!(
            original.evaluate(input).unwrap(),
            restored.evaluate(input).unwrap()
        );
    }
    assert_eq!(
        original.enumerate().unwrap(),
        restored.enumerate().unwrap()
    );
}

#[test]
fn load_failures_are_classified() {
    let dir = tempfile::tempdir().unwrap();
    let malformed = dir.path().join("malformed.json");
    let incomplete = dir.path().join("incomplete.json");
    fs::write(&malformed, "{ \"states\": [").unwrap();
    fs::write(&incomplete, r#"{ "states": ["q0"], "alphabet": [] }"#).unwrap();

    let mut session = defined_session();
    let kind = |result: Result<_, SessionError>| match result {
        Err(SessionError::Persistence(error)) => error.kind(),
        other => panic!("expected a persistence error, got {other:?}"),
    };

    assert_eq!(
        kind(session.load(dir.path().join("absent.json"))),
        LoadFailure::NotFound
    );
    assert_eq!(kind(session.load(&malformed)), LoadFailure::Malformed);
    assert_eq!(kind(session.load(&incomplete)), LoadFailure::Incomplete);

    assert_eq!(session.automaton().unwrap().start_state(), "q0");
}
