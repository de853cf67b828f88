//! Agent configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the built-in vocabulary, synonyms and selector threshold.

use serde::Deserialize;

use pl_automata::{DEFAULT_KEYWORDS, DEFAULT_THRESHOLD};

use crate::normalizer::{SynonymRule, default_synonyms};

/// Log output format for the front end binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Top-level configuration for the interpreter and its front end.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Unexpected-token count up to which the DFA is chosen.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Keyword vocabulary.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
    /// Synonym rewrites, applied in order.
    #[serde(default = "default_synonyms")]
    pub synonyms: Vec<SynonymRule>,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Print the full JSON report for every command instead of a summary line.
    #[serde(default)]
    pub report_json: bool,
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

fn default_vocabulary() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            vocabulary: default_vocabulary(),
            synonyms: default_synonyms(),
            log_format: LogFormat::default(),
            report_json: false,
        }
    }
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
