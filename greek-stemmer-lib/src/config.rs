use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::types::StemmerConfig;

const EMBEDDED_JSON: &[u8] = include_bytes!("../data/stemmer_config.json");

impl StemmerConfig {
    /// The exception and protected-word tables compiled into the library.
    pub fn embedded() -> Self {
        Self::from_slice(EMBEDDED_JSON).expect("embedded stemmer config is invalid")
    }

    /// Parse and validate a JSON payload.
    pub fn from_slice(json: &[u8]) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_slice(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON payload held in a string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Read, parse and validate a JSON payload from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    /// Reject payloads the stemmer cannot run correctly with: an empty
    /// exception table, an empty exception key, or an empty protected word.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.exceptions.is_empty() {
            Some("exception table is empty".to_string())
        } else if self.exceptions.contains_key("") {
            Some("exception table has an empty key".to_string())
        } else if self.protected_words.iter().any(|w| w.is_empty()) {
            Some("protected word list has an empty entry".to_string())
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!(error = %msg, "rejecting stemmer configuration");
                Err(Error::Config(msg))
            }
            None => Ok(()),
        }
    }
}
