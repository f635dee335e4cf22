//! Configurable keyword and pattern tables for the analysis engines.
//!
//! The tables are plain data: curated regex strings, keyword lists, and a
//! handful of tuning thresholds. The engines compile them at construction
//! time, so an invalid pattern surfaces as an error before any parsing
//! happens. `Default` carries the curated production lists; a TOML file can
//! override any subset of fields.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use roster_core::vocab::Vocabulary;
//!
//! let vocab = Vocabulary::load(Path::new("config/vocabulary.toml")).unwrap();
//! assert!(!vocab.title.ripper_channels.is_empty());
//! ```

mod sentiment;
mod title;

pub use sentiment::SentimentLexicon;
pub use title::{TitleVocabulary, VersionRule};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level container for both engines' vocabularies, loadable from a
/// single TOML file with `[title]` and `[sentiment]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub title: TitleVocabulary,

    #[serde(default)]
    pub sentiment: SentimentLexicon,
}

impl Vocabulary {
    /// Load vocabularies from a TOML file. Fields absent from the file keep
    /// their curated defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let vocab: Self = toml::from_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "failed to parse vocabulary from {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = Vocabulary::load(Path::new("/nonexistent/path/vocab.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml [[[[").unwrap();

        let result = Vocabulary::load(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_empty_toml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let vocab = Vocabulary::load(&path).unwrap();
        assert!(!vocab.title.separators.is_empty());
        assert!(!vocab.sentiment.positive_boosters.is_empty());
    }

    #[test]
    fn test_load_partial_override() {
        let toml_content = r#"
[title]
separators = [" - "]

[sentiment]
engagement_words = ["playlist"]
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, toml_content).unwrap();

        let vocab = Vocabulary::load(&path).unwrap();
        assert_eq!(vocab.title.separators, vec![" - "]);
        assert_eq!(vocab.sentiment.engagement_words, vec!["playlist"]);
        // Untouched fields keep their defaults.
        assert!(!vocab.title.ripper_channels.is_empty());
        assert!(!vocab.sentiment.request_patterns.is_empty());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let vocab = Vocabulary::default();
        let serialized = toml::to_string(&vocab).unwrap();
        let parsed: Vocabulary = toml::from_str(&serialized).unwrap();
        assert_eq!(
            parsed.title.version_rules.len(),
            vocab.title.version_rules.len()
        );
        assert_eq!(
            parsed.sentiment.positive_boosters.len(),
            vocab.sentiment.positive_boosters.len()
        );
    }
}
