use std::collections::{HashMap, HashSet};
use std::fmt;

/// A state ID in the NFA
pub type StateId = usize;

/// A Thompson NFA state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Whether reaching this state at the end of input is a match
    pub accepting: bool,
    /// At most one target per input character
    pub transitions: HashMap<char, StateId>,
    /// Targets reached without consuming input, in insertion order
    pub epsilon: Vec<StateId>,
}

impl State {
    fn new(accepting: bool) -> Self {
        Self {
            accepting,
            ..Self::default()
        }
    }

    /// The target of the transition on `ch`, if any
    pub fn next(&self, ch: char) -> Option<StateId> {
        self.transitions.get(&ch).copied()
    }

    /// Returns true if this state has any epsilon transitions
    pub fn has_epsilon(&self) -> bool {
        !self.epsilon.is_empty()
    }
}

/// Fragment of an NFA with start and end states
///
/// When produced by one of the construction rules, `end` is the only
/// accepting state of the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/// A Thompson NFA
///
/// States live in a single arena and refer to each other by [`StateId`], so
/// the back edges of a closure are plain indices.
#[derive(Clone, PartialEq, Eq)]
pub struct NFA {
    states: Vec<State>,
    start: StateId,
}

impl NFA {
    /// Create a new empty NFA
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: 0,
        }
    }

    /// The state matching starts from
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Make `start` the entry state
    pub fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    /// Total number of states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no state has been allocated yet
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state by ID
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// IDs of every state whose accepting flag is set
    pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(id, _)| id)
    }

    /// Add a new state and return its ID
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(accepting));
        id
    }

    /// Add a transition from `from` to `to` on `ch`, replacing any previous
    /// target for that character
    pub fn add_transition(&mut self, from: StateId, ch: char, to: StateId) {
        self.states[from].transitions.insert(ch, to);
    }

    /// Connect two states with an epsilon transition
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from].epsilon.push(to);
    }

    /// Clear or set the accepting flag of a state
    pub fn set_accepting(&mut self, id: StateId, accepting: bool) {
        self.states[id].accepting = accepting;
    }

    /// Fragment matching only the empty string
    pub fn epsilon(&mut self) -> Fragment {
        let start = self.add_state(false);
        let end = self.add_state(true);
        self.add_epsilon(start, end);
        Fragment { start, end }
    }

    /// Fragment matching exactly `ch`
    pub fn symbol(&mut self, ch: char) -> Fragment {
        let start = self.add_state(false);
        let end = self.add_state(true);
        self.add_transition(start, ch, end);
        Fragment { start, end }
    }

    /// `first` followed by `second`
    pub fn concat(&mut self, first: Fragment, second: Fragment) -> Fragment {
        self.add_epsilon(first.end, second.start);
        self.set_accepting(first.end, false);
        Fragment {
            start: first.start,
            end: second.end,
        }
    }

    /// Either `first` or `second`, joined by new start and end states
    pub fn union(&mut self, first: Fragment, second: Fragment) -> Fragment {
        let start = self.add_state(false);
        self.add_epsilon(start, first.start);
        self.add_epsilon(start, second.start);

        let end = self.add_state(true);
        self.add_epsilon(first.end, end);
        self.set_accepting(first.end, false);
        self.add_epsilon(second.end, end);
        self.set_accepting(second.end, false);

        Fragment { start, end }
    }

    /// Zero or more repetitions of `inner`
    pub fn closure(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state(false);
        let end = self.add_state(true);

        self.add_epsilon(start, end);
        self.add_epsilon(start, inner.start);

        self.add_epsilon(inner.end, end);
        self.add_epsilon(inner.end, inner.start);
        self.set_accepting(inner.end, false);

        Fragment { start, end }
    }

    /// Settle a set of states by following epsilon transitions.
    ///
    /// A state with no epsilon transitions is part of the result. A state
    /// with epsilon transitions is never part of the result, even when it is
    /// in `states`; only the states it eventually leads to are. Traversal is
    /// iterative and each state is expanded at most once, so cycles
    /// introduced by closures terminate.
    pub fn epsilon_closure<I>(&self, states: I) -> HashSet<StateId>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closure = HashSet::new();
        let mut visited = HashSet::new();
        let mut stack: Vec<StateId> = states.into_iter().collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let state = &self.states[id];
            if state.has_epsilon() {
                stack.extend(state.epsilon.iter().rev().copied());
            } else {
                closure.insert(id);
            }
        }

        closure
    }

    /// States reached from `states` by consuming `ch`, before settling
    pub fn step<'a, I>(&self, states: I, ch: char) -> HashSet<StateId>
    where
        I: IntoIterator<Item = &'a StateId>,
    {
        states
            .into_iter()
            .filter_map(|&id| self.states[id].next(ch))
            .collect()
    }

    /// Check if any state in the set is accepting
    pub fn is_accepting(&self, states: &HashSet<StateId>) -> bool {
        states.iter().any(|&id| self.states[id].accepting)
    }
}

impl Default for NFA {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NFA(")?;
        for (id, state) in self.states.iter().enumerate() {
            let marker = if id == self.start { '^' } else { ' ' };
            let accept = if state.accepting { '*' } else { ' ' };
            write!(f, "{}{}{:06?}:", marker, accept, id)?;

            let mut transitions: Vec<_> = state.transitions.iter().collect();
            transitions.sort();
            for (ch, target) in transitions {
                write!(f, " {:?} => {}", ch, target)?;
            }
            if state.has_epsilon() {
                write!(f, " eps => {:?}", state.epsilon)?;
            }
            writeln!(f)?;
        }
        write!(f, ")")
    }
}
