//! Fixed keyword vocabulary shared by the selector and the NFA builder.

use std::collections::HashSet;

/// Words the automata treat as meaningful. Everything else is "unexpected".
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "turn", "on", "off", "light", "fan", "heater", "change", "volume",
];

/// Set of known command keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    /// Number of tokens not present in the vocabulary (duplicates count each time).
    pub fn count_unexpected(&self, tokens: &[String]) -> usize {
        tokens.iter().filter(|t| !self.contains(t)).count()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_words(DEFAULT_KEYWORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn default_keywords() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), 8);
        for word in ["turn", "on", "off", "light", "fan", "heater", "change", "volume"] {
            assert!(vocab.contains(word), "{word} should be a keyword");
        }
        assert!(!vocab.contains("the"));
        assert!(!vocab.contains("50"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Tokens arrive already lowercased from the normalizer.
        assert!(!Vocabulary::default().contains("Turn"));
    }

    #[test]
    fn counts_unexpected_with_duplicates() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.count_unexpected(&tokens(&["turn", "on", "light"])), 0);
        assert_eq!(vocab.count_unexpected(&tokens(&["turn", "on", "the", "light"])), 1);
        assert_eq!(vocab.count_unexpected(&tokens(&["the", "the", "light"])), 2);
        assert_eq!(vocab.count_unexpected(&[]), 0);
    }

    #[test]
    fn custom_vocabulary() {
        let vocab = Vocabulary::from_words(["open", "door"]);
        assert!(vocab.contains("door"));
        assert!(!vocab.contains("turn"));
        assert!(!vocab.is_empty());
    }
}
