use std::fmt;

use serde::{Deserialize, Serialize};

/// Which automaton model interpreted a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Deterministic finite automaton (single-state walk).
    Dfa,
    /// Nondeterministic finite automaton with epsilon transitions.
    Nfa,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Dfa => f.write_str("DFA"),
            ModelKind::Nfa => f.write_str("NFA"),
        }
    }
}

/// A recognized command intent, carrying the argument its actuator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    LightsOn,
    LightsOff,
    /// Requested output volume in percent.
    SetVolume(u8),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::LightsOn => f.write_str("lights on"),
            Intent::LightsOff => f.write_str("lights off"),
            Intent::SetVolume(percent) => write!(f, "set volume to {percent}%"),
        }
    }
}
