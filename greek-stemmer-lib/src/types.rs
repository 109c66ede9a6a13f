use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration payload: exception tails and words that are never stemmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmerConfig {
    /// Word tail → replacement tail, applied before the rule pipeline
    /// (e.g. {ΚΡΕΑΤΟΣ} → {ΚΡΕ}).
    pub exceptions: BTreeMap<String, String>,
    /// Words returned as-is after normalization.
    #[serde(
        rename = "protectedwords",
        alias = "protectedWords",
        alias = "protected_words",
        default
    )]
    pub protected_words: Vec<String>,
}

/// A word paired with the stem it reduced to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}
