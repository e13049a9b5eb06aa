use crate::nfa::{StateId, NFA};
use std::collections::HashSet;

/// A matcher that simulates a Thompson NFA against whole inputs
///
/// The matcher only borrows the NFA, and every search keeps its own set of
/// live states, so one NFA can serve any number of matchers and searches at
/// once.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &str) -> bool {
        let mut current = self.start_states();

        for ch in input.chars() {
            if current.is_empty() {
                // Dead: nothing left that could consume the rest.
                return false;
            }
            current = self.advance(&current, ch);
            trace!("after {:?}: {} live states", ch, current.len());
        }

        self.nfa.is_accepting(&current)
    }

    /// The settled states before any input is consumed
    pub fn start_states(&self) -> HashSet<StateId> {
        self.nfa.epsilon_closure([self.nfa.start()])
    }

    /// Consume one character from a settled state set
    pub fn advance(&self, current: &HashSet<StateId>, ch: char) -> HashSet<StateId> {
        let next = self.nfa.step(current, ch);
        self.nfa.epsilon_closure(next)
    }
}
