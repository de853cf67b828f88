//! Linear DFA built from one command's tokens.
//!
//! States form the chain `q0 -> q1 -> ... -> qn`; the edge into `qi` is
//! labeled with token `i` and `qn` is the only accepting state. The builder
//! never revisits a state, so the automaton has no cycles and no branching.

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::{Alphabet, StateId, Symbol};

/// Deterministic automaton over literal tokens, stored as a state arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    /// Outgoing edges per state, indexed by `StateId`.
    transitions: Vec<BTreeMap<String, StateId>>,
    accepting: BTreeSet<StateId>,
    alphabet: Alphabet,
}

impl Dfa {
    /// Build the token chain. Every token joins the alphabet as a literal,
    /// regardless of vocabulary membership.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut dfa = Self {
            transitions: vec![BTreeMap::new()],
            accepting: BTreeSet::new(),
            alphabet: Alphabet::new(),
        };

        let mut current = dfa.start();
        for token in tokens {
            let next = StateId(dfa.transitions.len());
            dfa.transitions.push(BTreeMap::new());
            dfa.transitions[current.0].insert(token.clone(), next);
            dfa.alphabet.insert(Symbol::literal(token.as_str()));
            current = next;
        }
        dfa.accepting.insert(current);
        dfa
    }

    pub fn start(&self) -> StateId {
        StateId(0)
    }

    /// Number of states in the arena.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn into_alphabet(self) -> Alphabet {
        self.alphabet
    }

    /// Target of `(state, token)`, if the partial transition function defines one.
    pub fn transition(&self, state: StateId, token: &str) -> Option<StateId> {
        self.transitions.get(state.0)?.get(token).copied()
    }

    /// Walk the tokens from `start`. Rejects as soon as a token has no edge;
    /// otherwise accepts iff the final state is accepting.
    pub fn accepts(&self, tokens: &[String]) -> bool {
        let mut current = self.start();
        for token in tokens {
            match self.transition(current, token) {
                Some(next) => current = next,
                None => {
                    tracing::debug!(state = %current, token = %token, "dfa: no transition");
                    return false;
                }
            }
        }
        self.is_accepting(current)
    }
}
