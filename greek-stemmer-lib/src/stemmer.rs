// Greek stemmer: normalization, gatekeeping, exception tails, then the
// rule pipeline in its fixed order.
//
//   1. normalize              (normalize.rs)
//   2. gate                   too short / not Greek / protected -> return as-is
//   3. exception tail         shortest configured tail wins
//   4. steps 2a..6b           rules::INFLECTIONAL, in table order
//   5. long-word guard        only if nothing was stripped so far
//   6. step 7                 comparative / superlative
//
// Each step sees exactly what the previous one produced; there is no
// backtracking.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::Result;
use crate::normalize::{is_greek, normalize};
use crate::rules;
use crate::types::{StemResult, StemmerConfig};

/// Words shorter than this (in letters) are returned unstemmed.
pub const MIN_STEM_LENGTH: usize = 3;

/// Rule-based Greek stemmer. Immutable once built; share freely across threads.
#[derive(Debug, Clone)]
pub struct Stemmer {
    exceptions: HashMap<String, String>,
    protected: HashSet<String>,
}

impl Stemmer {
    /// Build a stemmer from the embedded configuration.
    pub fn new() -> Self {
        Self::build(StemmerConfig::embedded())
    }

    /// Build a stemmer from a caller-supplied configuration. Fails if the
    /// configuration does not validate.
    pub fn from_config(config: StemmerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StemmerConfig) -> Self {
        let exceptions: HashMap<String, String> = config.exceptions.into_iter().collect();
        let protected: HashSet<String> = config.protected_words.into_iter().collect();
        debug!(
            exceptions = exceptions.len(),
            protected = protected.len(),
            "stemmer configured"
        );
        Self {
            exceptions,
            protected,
        }
    }

    /// Reduce `word` to its stem. Total and deterministic: anything that
    /// cannot be stemmed comes back normalized.
    pub fn stem(&self, word: &str) -> String {
        let normalized = normalize(word);
        let length = normalized.chars().count();

        if length < MIN_STEM_LENGTH || !is_greek(&normalized) || self.protected.contains(&normalized)
        {
            return normalized;
        }

        let mut stem = self.resolve_exception(&normalized).unwrap_or(normalized);

        for step in rules::INFLECTIONAL {
            if let Some(next) = step.apply(&stem) {
                stem = next;
            }
        }

        if stem.chars().count() == length {
            if let Some(next) = rules::LONG_WORD.apply(&stem) {
                stem = next;
            }
        }

        if let Some(next) = rules::DEGREE.apply(&stem) {
            stem = next;
        }

        stem
    }

    /// Stem every word, keeping each input next to its stem.
    pub fn stem_all<I, S>(&self, words: I) -> Vec<StemResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| StemResult {
                word: w.as_ref().to_string(),
                stem: self.stem(w.as_ref()),
            })
            .collect()
    }

    /// True if the normalized form of `word` is a protected word.
    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(&normalize(word))
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn protected_count(&self) -> usize {
        self.protected.len()
    }

    /// Replace the shortest configured tail of `word`, if any. The prefix
    /// in front of the tail may be empty.
    fn resolve_exception(&self, word: &str) -> Option<String> {
        word.char_indices().rev().find_map(|(i, _)| {
            let (head, tail) = word.split_at(i);
            self.exceptions
                .get(tail)
                .map(|replacement| format!("{head}{replacement}"))
        })
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}
