//! Automaton selector: decides between the DFA and NFA models.
//!
//! Commands close to the keyword vocabulary are treated as deterministic.
//! Once more than `threshold` tokens fall outside the vocabulary, the command
//! is modeled as an NFA so the unknown words can be absorbed by epsilon edges
//! instead of halting the match.

use pl_protocol::ModelKind;

use crate::vocabulary::Vocabulary;

/// Unexpected-token count up to which a DFA is still chosen.
pub const DEFAULT_THRESHOLD: usize = 1;

/// Selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    pub threshold: usize,
}

impl Selector {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Pick the automaton model for a token sequence. Total and deterministic.
    pub fn decide(&self, tokens: &[String], vocabulary: &Vocabulary) -> ModelKind {
        decide_automaton(tokens, vocabulary, self.threshold)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

pub fn decide_automaton(tokens: &[String], vocabulary: &Vocabulary, threshold: usize) -> ModelKind {
    let unexpected = vocabulary.count_unexpected(tokens);
    let model = if unexpected <= threshold {
        ModelKind::Dfa
    } else {
        ModelKind::Nfa
    };
    tracing::debug!(unexpected, threshold, model = %model, "automaton selected");
    model
}
