//! NFA with epsilon transitions, built from one command's tokens.
//!
//! The builder produces the same linear chain as the DFA, but tokens outside
//! the vocabulary label their edge with epsilon. Nondeterminism comes only
//! from those epsilon edges: simulation tracks the set of reachable states.
//!
//! Simulation is written for arbitrary NFA shapes (branching, cycles), not
//! just the chains the builder produces, so the graph-editing methods are
//! public.

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::{Alphabet, StateId, Symbol};
use crate::vocabulary::Vocabulary;

/// A set of simultaneously active states.
pub type StateSet = BTreeSet<StateId>;

/// Nondeterministic automaton stored as a state arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// Outgoing edges per state: symbol -> target set.
    transitions: Vec<BTreeMap<Symbol, StateSet>>,
    accepting: StateSet,
    alphabet: Alphabet,
}

impl Nfa {
    /// A single non-accepting start state and no edges.
    pub fn new() -> Self {
        Self {
            transitions: vec![BTreeMap::new()],
            accepting: StateSet::new(),
            alphabet: Alphabet::new(),
        }
    }

    /// Build the token chain, folding out-of-vocabulary tokens to epsilon.
    pub fn from_tokens(tokens: &[String], vocabulary: &Vocabulary) -> Self {
        let mut nfa = Self::new();
        let mut current = nfa.start();
        for token in tokens {
            let next = nfa.add_state();
            nfa.add_transition(current, Symbol::classify(token, vocabulary), next);
            current = next;
        }
        nfa.set_accepting(current);
        nfa
    }

    pub fn start(&self) -> StateId {
        StateId(0)
    }

    pub fn add_state(&mut self) -> StateId {
        self.transitions.push(BTreeMap::new());
        StateId(self.transitions.len() - 1)
    }

    /// Add an edge and record its symbol in the alphabet.
    ///
    /// # Panics
    ///
    /// If either state was not created by this automaton.
    pub fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        assert!(from.0 < self.transitions.len(), "unknown source state {from}");
        assert!(to.0 < self.transitions.len(), "unknown target state {to}");
        self.alphabet.insert(symbol.clone());
        self.transitions[from.0].entry(symbol).or_default().insert(to);
    }

    pub fn set_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn into_alphabet(self) -> Alphabet {
        self.alphabet
    }

    /// Direct successors of one state on one symbol.
    pub fn targets<'a>(
        &'a self,
        state: StateId,
        symbol: &Symbol,
    ) -> impl Iterator<Item = StateId> + 'a {
        self.transitions
            .get(state.0)
            .and_then(|edges| edges.get(symbol))
            .into_iter()
            .flatten()
            .copied()
    }

    /// All states reachable from `states` through zero or more epsilon edges.
    ///
    /// Iterative depth-first traversal; the visited set doubles as the result,
    /// which keeps cyclic epsilon graphs finite.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = StateId>) -> StateSet {
        let mut closure = StateSet::new();
        let mut stack = Vec::new();
        for state in states {
            if closure.insert(state) {
                stack.push(state);
            }
        }

        while let Some(current) = stack.pop() {
            for next in self.targets(current, &Symbol::Epsilon) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Direct successors of a state set on a symbol (no closure).
    pub fn move_on(&self, states: &StateSet, symbol: &Symbol) -> StateSet {
        states
            .iter()
            .flat_map(|&state| self.targets(state, symbol))
            .collect()
    }

    /// Consume one input token.
    ///
    /// Every token moves along its literal edges and the result is closed
    /// under epsilon. Out-of-vocabulary tokens are also absorbed: the current
    /// set is kept as well, since their epsilon edge was already crossed by
    /// the closure.
    pub fn step(&self, current: &StateSet, token: &str, vocabulary: &Vocabulary) -> StateSet {
        let mut next = self.epsilon_closure(self.move_on(current, &Symbol::literal(token)));
        if !vocabulary.contains(token) {
            next.extend(current.iter().copied());
        }
        next
    }

    /// Accept iff some state reachable after all tokens is accepting.
    pub fn accepts(&self, tokens: &[String], vocabulary: &Vocabulary) -> bool {
        let mut current = self.epsilon_closure([self.start()]);
        for token in tokens {
            current = self.step(&current, token, vocabulary);
            if current.is_empty() {
                tracing::debug!(token = %token, "nfa: no reachable states");
                return false;
            }
        }
        current.iter().any(|state| self.accepting.contains(state))
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}
