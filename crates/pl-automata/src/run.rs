//! One-shot select, build and simulate.

use pl_protocol::ModelKind;

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::selector::Selector;
use crate::symbol::Alphabet;
use crate::vocabulary::Vocabulary;

/// Either automaton model, built fresh for a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Automaton {
    Dfa(Dfa),
    Nfa(Nfa),
}

impl Automaton {
    /// Build the automaton of the requested model from `tokens`.
    pub fn build(model: ModelKind, tokens: &[String], vocabulary: &Vocabulary) -> Self {
        match model {
            ModelKind::Dfa => Automaton::Dfa(Dfa::from_tokens(tokens)),
            ModelKind::Nfa => Automaton::Nfa(Nfa::from_tokens(tokens, vocabulary)),
        }
    }

    pub fn model(&self) -> ModelKind {
        match self {
            Automaton::Dfa(_) => ModelKind::Dfa,
            Automaton::Nfa(_) => ModelKind::Nfa,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        match self {
            Automaton::Dfa(dfa) => dfa.alphabet(),
            Automaton::Nfa(nfa) => nfa.alphabet(),
        }
    }

    /// Run the matching simulator.
    pub fn accepts(&self, tokens: &[String], vocabulary: &Vocabulary) -> bool {
        match self {
            Automaton::Dfa(dfa) => dfa.accepts(tokens),
            Automaton::Nfa(nfa) => nfa.accepts(tokens, vocabulary),
        }
    }

    pub fn into_alphabet(self) -> Alphabet {
        match self {
            Automaton::Dfa(dfa) => dfa.into_alphabet(),
            Automaton::Nfa(nfa) => nfa.into_alphabet(),
        }
    }
}

/// Outcome of one automaton run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub model: ModelKind,
    pub accepted: bool,
    /// Alphabet of the automaton that ran; the dispatcher's intent fingerprint.
    pub alphabet: Alphabet,
}

impl RunResult {
    /// Alphabet in printable form (`ε` for epsilon), sorted.
    pub fn alphabet_strings(&self) -> Vec<String> {
        self.alphabet.iter().map(ToString::to_string).collect()
    }
}

/// Select a model, build its automaton from `tokens`, simulate it on the same
/// tokens, and discard it.
pub fn run(tokens: &[String], vocabulary: &Vocabulary, selector: &Selector) -> RunResult {
    let model = selector.decide(tokens, vocabulary);
    let automaton = Automaton::build(model, tokens, vocabulary);
    tracing::trace!(?automaton, "automaton built");

    let accepted = automaton.accepts(tokens, vocabulary);
    let result = RunResult {
        model,
        accepted,
        alphabet: automaton.into_alphabet(),
    };
    tracing::debug!(
        model = %result.model,
        accepted,
        alphabet = ?result.alphabet_strings(),
        "automaton run finished"
    );
    result
}
