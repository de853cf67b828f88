//! Command normalizer: lowercasing, synonym substitution, tokenization.
//!
//! Rules are applied in order as plain substring replacements, so an earlier
//! rule's output can feed a later rule.

use serde::{Deserialize, Serialize};

/// One synonym rewrite, `from` -> `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRule {
    pub from: String,
    pub to: String,
}

impl SynonymRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Built-in synonym rules, in application order.
pub fn default_synonyms() -> Vec<SynonymRule> {
    vec![
        SynonymRule::new("switch on", "turn on"),
        SynonymRule::new("activate", "turn on"),
        SynonymRule::new("shut down", "turn off"),
        SynonymRule::new("lamp", "light"),
    ]
}

/// Turns raw operator text into the token sequence the automata consume.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<SynonymRule>,
}

impl Normalizer {
    /// Rules with an empty `from` are dropped; they would match everywhere.
    pub fn new(rules: Vec<SynonymRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter(|rule| {
                let keep = !rule.from.is_empty();
                if !keep {
                    tracing::warn!(to = %rule.to, "ignoring synonym rule with empty pattern");
                }
                keep
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[SynonymRule] {
        &self.rules
    }

    /// Lowercase, then apply every rule in order.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.to_lowercase();
        for rule in &self.rules {
            if text.contains(rule.from.as_str()) {
                text = text.replace(rule.from.as_str(), &rule.to);
            }
        }
        text
    }

    /// Normalize and split on whitespace.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        self.normalize(raw)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(default_synonyms())
    }
}
