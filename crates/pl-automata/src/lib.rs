//! Automaton core for Parlance.
//!
//! Every command is interpreted by an automaton built on the fly from its
//! own tokens and discarded after a single simulation run:
//!
//! - **Selector**: commands with at most `threshold` out-of-vocabulary tokens
//!   get a DFA, anything noisier gets an NFA.
//! - **DFA**: a linear chain, one state per token, walked deterministically.
//! - **NFA**: the same chain with out-of-vocabulary edges labeled epsilon,
//!   simulated by subset tracking and epsilon-closure.
//!
//! The resulting alphabet is what the dispatcher matches against its intent
//! table.

pub mod dfa;
pub mod nfa;
pub mod run;
pub mod selector;
pub mod symbol;
pub mod vocabulary;

pub use dfa::Dfa;
pub use nfa::{Nfa, StateSet};
pub use run::{Automaton, RunResult, run};
pub use selector::{DEFAULT_THRESHOLD, Selector, decide_automaton};
pub use symbol::{Alphabet, EPSILON, StateId, Symbol};
pub use vocabulary::{DEFAULT_KEYWORDS, Vocabulary};
