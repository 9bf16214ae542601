//! Shortest-first enumeration of an automaton's language.

use super::automaton::Automaton;
use super::definition::EMPTY_STRING;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// A configuration of the search: the state reached and the string read.
type Configuration<'a> = (&'a str, String);

/// Iterator over accepted strings, shortest first.
///
/// Breadth-first search over `(state, string)` configurations starting at
/// `(start, "")`. Successors are expanded in lexicographic symbol order, so
/// strings of equal length come out in a fixed, reproducible order. If the
/// start state is accepting, [`EMPTY_STRING`] is yielded first.
///
/// A configuration is never enqueued twice. Paths with no defined move simply
/// stop growing, and configurations in states that cannot reach an accepting
/// state are never enqueued. The iterator therefore ends for every finite
/// language and is unbounded for every infinite one.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    automaton: &'a Automaton,
    live: HashSet<&'a str>,
    seen: HashSet<Configuration<'a>>,
    queue: VecDeque<Configuration<'a>>,
    ready: VecDeque<String>,
}

impl<'a> Words<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        let origin: Configuration<'a> = (automaton.start_state(), String::new());
        let mut ready = VecDeque::new();
        if automaton.is_accepting(automaton.start_state()) {
            ready.push_back(EMPTY_STRING.to_string());
        }
        Self {
            automaton,
            live: live_states(automaton),
            seen: HashSet::from([origin.clone()]),
            queue: VecDeque::from([origin]),
            ready,
        }
    }

    /// Dequeue one configuration and queue its successors.
    ///
    /// Returns `false` once the queue is exhausted.
    fn expand(&mut self) -> bool {
        let Some((state, word)) = self.queue.pop_front() else {
            return false;
        };

        let automaton = self.automaton;
        for (symbol, target) in automaton.transitions().successors(state) {
            if !self.live.contains(target) {
                continue;
            }
            let mut next = word.clone();
            next.push_str(symbol);

            if !self.seen.insert((target, next.clone())) {
                continue;
            }
            trace!("expanded {state} --{symbol}--> {target} reading '{next}'");
            if automaton.is_accepting(target) && !next.is_empty() {
                self.ready.push_back(next.clone());
            }
            self.queue.push_back((target, next));
        }
        true
    }
}

/// States from which some accepting state is reachable.
fn live_states(automaton: &Automaton) -> HashSet<&str> {
    let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
    for (origin, row) in automaton.transitions().rows() {
        for target in row.values() {
            predecessors
                .entry(target.as_str())
                .or_default()
                .push(origin.as_str());
        }
    }

    let mut live: HashSet<&str> = automaton
        .accepting_states()
        .iter()
        .map(String::as_str)
        .collect();
    let mut pending: Vec<&str> = live.iter().copied().collect();
    while let Some(state) = pending.pop() {
        for &origin in predecessors.get(state).into_iter().flatten() {
            if live.insert(origin) {
                pending.push(origin);
            }
        }
    }
    live
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.ready.pop_front() {
                return Some(word);
            }
            if !self.expand() {
                return None;
            }
        }
    }
}

impl Automaton {
    /// Lazily enumerate the accepted strings, shortest first.
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }

    /// Collect at most `limit` accepted strings, shortest first.
    ///
    /// The result is always a prefix of the full enumeration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_sim::core::{Automaton, Definition, Transition};
    ///
    /// // Strings over {0, 1} ending in 1.
    /// let automaton = Automaton::define(&Definition::new(
    ///     ["p", "q"],
    ///     ["0", "1"],
    ///     [
    ///         Transition::new("p", "0", "p"),
    ///         Transition::new("p", "1", "q"),
    ///         Transition::new("q", "0", "p"),
    ///         Transition::new("q", "1", "q"),
    ///     ],
    ///     "p",
    ///     ["q"],
    /// ))
    /// .unwrap();
    ///
    /// assert_eq!(automaton.enumerate_language(4), vec!["1", "01", "11", "001"]);
    /// ```
    pub fn enumerate_language(&self, limit: usize) -> Vec<String> {
        self.words().take(limit).collect()
    }
}
