//! Edge labels, alphabets and state identifiers.

use std::collections::BTreeSet;
use std::fmt;

use crate::vocabulary::Vocabulary;

/// Printed form of the epsilon symbol.
pub const EPSILON: &str = "ε";

/// Index of a state in an automaton's state arena. `q0` is always the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// An edge label: either a literal token or the epsilon symbol.
///
/// A token that happens to be spelled `ε` is still a `Literal`; only the
/// NFA builder ever produces `Epsilon`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Literal(String),
    Epsilon,
}

impl Symbol {
    pub fn literal(token: impl Into<String>) -> Self {
        Symbol::Literal(token.into())
    }

    /// NFA labeling rule: keywords keep their literal symbol, everything else
    /// folds to epsilon.
    pub fn classify(token: &str, vocabulary: &Vocabulary) -> Self {
        if vocabulary.contains(token) {
            Symbol::literal(token)
        } else {
            Symbol::Epsilon
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(token) => f.write_str(token),
            Symbol::Epsilon => f.write_str(EPSILON),
        }
    }
}

/// Distinct symbols used by an automaton's edges. Ordered so that reports
/// and logs are stable across runs.
pub type Alphabet = BTreeSet<Symbol>;
