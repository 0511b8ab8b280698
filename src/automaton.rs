//! Target automata for the separating-word search.
//!
//! [`Dfa`] is the whole capability set the search needs: an optional initial
//! state, a partial transition function, and an acceptance predicate. Any
//! representation implementing those three can be compared against a cache.
//!
//! [`CompactDfa`] is a small table-backed reference implementation with
//! partial transitions, used when no other automaton type is at hand.
//!
//! ```rust
//! use accept_cache::automaton::{CompactDfa, Dfa};
//!
//! let mut dfa = CompactDfa::new();
//! let s0 = dfa.add_initial_state(false);
//! let s1 = dfa.add_state(true);
//! dfa.add_transition(s0, 'a', s1);
//! assert!(dfa.accepts(&['a']));
//! assert!(!dfa.accepts(&['a', 'a'])); // undefined transition
//! ```

use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::word::Symbol;

/// Deterministic automaton as seen by the separating-word search.
pub trait Dfa<I> {
    /// State handle.
    type State: Clone;

    /// Initial state, or `None` for an automaton without one.
    fn initial_state(&self) -> Option<Self::State>;

    /// Successor of `state` on `input`, or `None` if undefined.
    fn transition(&self, state: &Self::State, input: &I) -> Option<Self::State>;

    /// Whether `state` is accepting.
    fn is_accepting(&self, state: &Self::State) -> bool;

    /// Run `word` from the initial state. A missing initial state or an
    /// undefined transition rejects.
    fn accepts(&self, word: &[I]) -> bool {
        let Some(mut state) = self.initial_state() else {
            return false;
        };
        for sym in word {
            match self.transition(&state, sym) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(&state)
    }
}

impl<I, D: Dfa<I> + ?Sized> Dfa<I> for &D {
    type State = D::State;

    fn initial_state(&self) -> Option<Self::State> {
        (**self).initial_state()
    }

    fn transition(&self, state: &Self::State, input: &I) -> Option<Self::State> {
        (**self).transition(state, input)
    }

    fn is_accepting(&self, state: &Self::State) -> bool {
        (**self).is_accepting(state)
    }
}

/// Table-backed DFA with dense `usize` states and partial transitions.
#[derive(Clone, Debug)]
pub struct CompactDfa<I: Symbol> {
    alphabet: Alphabet<I>,
    accepting: Vec<bool>,
    transitions: Vec<Vec<Option<usize>>>,
    initial: Option<usize>,
}

impl<I: Symbol> CompactDfa<I> {
    /// An automaton without states.
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::new())
    }

    /// An automaton without states over a preset alphabet.
    pub fn with_alphabet(alphabet: Alphabet<I>) -> Self {
        Self {
            alphabet,
            accepting: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Add a state and return its id.
    pub fn add_state(&mut self, accepting: bool) -> usize {
        self.accepting.push(accepting);
        self.transitions.push(Vec::new());
        self.accepting.len() - 1
    }

    /// Add a state and make it initial.
    pub fn add_initial_state(&mut self, accepting: bool) -> usize {
        let state = self.add_state(accepting);
        self.initial = Some(state);
        state
    }

    /// Make `state` initial, or clear the initial state with `None`.
    pub fn set_initial(&mut self, state: Option<usize>) {
        self.initial = state.filter(|s| *s < self.accepting.len());
    }

    /// Change the acceptance of `state`. Ignored for unknown states.
    pub fn set_accepting(&mut self, state: usize, accepting: bool) {
        if let Some(slot) = self.accepting.get_mut(state) {
            *slot = accepting;
        }
    }

    /// Define `from --input--> to`, registering `input` if needed.
    ///
    /// Returns `false` (and changes nothing) if either state does not exist.
    pub fn add_transition(&mut self, from: usize, input: I, to: usize) -> bool {
        if from >= self.accepting.len() || to >= self.accepting.len() {
            return false;
        }
        let idx = self.alphabet.add_symbol(input);
        let row = &mut self.transitions[from];
        if row.len() <= idx {
            row.resize(idx + 1, None);
        }
        row[idx] = Some(to);
        true
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.accepting.len()
    }

    /// Symbols mentioned by any transition or preset in the alphabet.
    pub fn alphabet(&self) -> &Alphabet<I> {
        &self.alphabet
    }
}

impl<I: Symbol> Default for CompactDfa<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Symbol> Dfa<I> for CompactDfa<I> {
    type State = usize;

    fn initial_state(&self) -> Option<usize> {
        self.initial
    }

    fn transition(&self, state: &usize, input: &I) -> Option<usize> {
        let idx = self.alphabet.index_of(input)?;
        self.transitions.get(*state)?.get(idx).copied().flatten()
    }

    fn is_accepting(&self, state: &usize) -> bool {
        self.accepting.get(*state).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_initial_state_rejects_everything() {
        let mut dfa: CompactDfa<char> = CompactDfa::new();
        dfa.add_state(true);
        assert_eq!(dfa.initial_state(), None);
        assert!(!dfa.accepts(&[]));
    }

    #[test]
    fn test_partial_transitions() {
        let mut dfa = CompactDfa::new();
        let s0 = dfa.add_initial_state(true);
        let s1 = dfa.add_state(false);
        assert!(dfa.add_transition(s0, 'a', s1));
        assert!(dfa.add_transition(s1, 'b', s0));
        assert!(!dfa.add_transition(s1, 'b', 9));

        assert!(dfa.accepts(&[]));
        assert!(!dfa.accepts(&['a']));
        assert!(dfa.accepts(&['a', 'b']));
        assert_eq!(dfa.transition(&s0, &'b'), None);
        assert_eq!(dfa.transition(&s0, &'z'), None);
    }

    #[test]
    fn test_reference_impl_is_a_dfa() {
        fn run<D: Dfa<char>>(d: D, w: &str) -> bool {
            let w: Vec<char> = w.chars().collect();
            d.accepts(&w)
        }
        let mut dfa = CompactDfa::new();
        let s0 = dfa.add_initial_state(false);
        dfa.add_transition(s0, 'x', s0);
        dfa.set_accepting(s0, true);
        assert!(run(&dfa, "xxx"));
    }
}
