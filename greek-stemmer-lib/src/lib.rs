pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod rules;
pub mod stemmer;
pub mod types;

pub use error::{Error, Result};
pub use normalize::{ends_in_vowel, is_greek, normalize};
pub use stemmer::Stemmer;
pub use types::{StemResult, StemmerConfig};
