//! Booster feature extraction.
//!
//! Booster features measure how intensely a comment is written, independent
//! of what it says: punctuation pile-ups, letter elongation, ALL-CAPS
//! words, emoji, and urgency words. The weighted sum feeds both the intent
//! default and the sentiment score; emoji and caps weigh more than
//! punctuation alone.

use std::collections::BTreeMap;

use regex::Regex;

use roster_core::{Result, SentimentLexicon};

use crate::rx;

/// Feature weights for the combined booster score.
const EXCLAMATION_WEIGHT: f64 = 0.4;
const ELONGATION_WEIGHT: f64 = 0.5;
const CAPS_WEIGHT: f64 = 0.6;
const FIRE_EMOJI_WEIGHT: f64 = 0.8;
const URGENCY_WEIGHT: f64 = 0.5;
const BOOSTER_CAP: f64 = 4.0;

const FIRE_EMOJI: char = '\u{1F525}';

/// Extracted intensity signals for one comment.
#[derive(Debug, Clone, PartialEq)]
pub struct BoosterFeatures {
    pub exclamation_count: usize,
    /// Number of 3+ same-letter runs.
    pub elongation_count: usize,
    /// Length of the longest 2+ same-letter run.
    pub max_elongation: usize,
    pub caps_word_count: usize,
    /// ALL-CAPS words relative to total word count.
    pub caps_ratio: f64,
    pub fire_emoji_count: usize,
    pub total_emoji_count: usize,
    pub urgency_count: usize,
    /// Weighted sum of the above, clamped to `[0, 4.0]`.
    pub booster_score: f64,
}

impl BoosterFeatures {
    /// Diagnostic view of the features as a name → value map.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("exclamation_count".to_string(), self.exclamation_count as f64),
            ("elongation_count".to_string(), self.elongation_count as f64),
            ("max_elongation".to_string(), self.max_elongation as f64),
            ("caps_word_count".to_string(), self.caps_word_count as f64),
            ("caps_ratio".to_string(), self.caps_ratio),
            ("fire_emoji_count".to_string(), self.fire_emoji_count as f64),
            ("total_emoji_count".to_string(), self.total_emoji_count as f64),
            ("urgency_count".to_string(), self.urgency_count as f64),
            ("booster_score".to_string(), self.booster_score),
        ])
    }
}

#[derive(Debug)]
pub struct BoosterExtractor {
    rx_caps: Regex,
    rx_emoji: Regex,
    rx_urgency: Regex,
}

impl BoosterExtractor {
    /// Compile the booster patterns from the lexicon.
    ///
    /// # Errors
    /// Returns an error if the configured urgency pattern is invalid.
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self> {
        Ok(Self {
            rx_caps: rx::compile(r"\b[A-Z]{2,}\b")?,
            rx_emoji: rx::compile(
                r"[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\u{1F1E0}-\u{1F1FF}]",
            )?,
            rx_urgency: rx::compile(&lexicon.urgency_pattern)?,
        })
    }

    /// Extract booster features from raw comment text.
    #[must_use]
    pub fn extract(&self, text: &str) -> BoosterFeatures {
        let text_lower = text.to_lowercase();

        let exclamation_count = text.matches('!').count();
        let (elongation_count, max_elongation) = letter_runs(&text_lower);

        let caps_word_count = self.rx_caps.find_iter(text).count();
        let word_count = text.split_whitespace().count().max(1);
        let caps_ratio = caps_word_count as f64 / word_count as f64;

        let fire_emoji_count = text.matches(FIRE_EMOJI).count();
        let total_emoji_count = self.rx_emoji.find_iter(text).count();
        let urgency_count = self.rx_urgency.find_iter(&text_lower).count();

        let raw_score = exclamation_count as f64 * EXCLAMATION_WEIGHT
            + elongation_count as f64 * ELONGATION_WEIGHT
            + caps_word_count as f64 * CAPS_WEIGHT
            + fire_emoji_count as f64 * FIRE_EMOJI_WEIGHT
            + urgency_count as f64 * URGENCY_WEIGHT;

        BoosterFeatures {
            exclamation_count,
            elongation_count,
            max_elongation,
            caps_word_count,
            caps_ratio,
            fire_emoji_count,
            total_emoji_count,
            urgency_count,
            booster_score: raw_score.min(BOOSTER_CAP),
        }
    }
}

/// Count same-letter runs in lowercased text.
///
/// Returns `(count of 3+ runs, length of the longest 2+ run)`. A linear
/// scan stands in for the backreference pattern `([a-z])\1{2,}`, which the
/// regex engine does not support.
fn letter_runs(text_lower: &str) -> (usize, usize) {
    let mut count = 0;
    let mut max_run = 0;
    let mut current: Option<char> = None;
    let mut run_len = 0;

    let mut close_run = |run_len: usize| {
        if run_len >= 3 {
            count += 1;
        }
        if run_len >= 2 && run_len > max_run {
            max_run = run_len;
        }
    };

    for c in text_lower.chars() {
        if c.is_ascii_lowercase() && current == Some(c) {
            run_len += 1;
        } else {
            close_run(run_len);
            current = c.is_ascii_lowercase().then_some(c);
            run_len = usize::from(current.is_some());
        }
    }
    close_run(run_len);

    (count, max_run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> BoosterExtractor {
        BoosterExtractor::new(&SentimentLexicon::default()).unwrap()
    }

    #[test]
    fn test_plain_text_has_no_boosters() {
        let features = extractor().extract("drop the album");
        assert_eq!(features.exclamation_count, 0);
        assert_eq!(features.elongation_count, 0);
        assert_eq!(features.caps_word_count, 0);
        assert_eq!(features.fire_emoji_count, 0);
        assert_eq!(features.urgency_count, 0);
        assert!(features.booster_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_exclamations() {
        let features = extractor().extract("visuals when?!!");
        assert_eq!(features.exclamation_count, 2);
        assert!((features.booster_score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_elongation_runs() {
        let features = extractor().extract("sheeeesh this goes");
        assert_eq!(features.elongation_count, 1);
        assert_eq!(features.max_elongation, 4);
    }

    #[test]
    fn test_two_letter_runs_track_max_but_do_not_count() {
        let features = extractor().extract("cool");
        assert_eq!(features.elongation_count, 0);
        assert_eq!(features.max_elongation, 2);
    }

    #[test]
    fn test_caps_words_and_ratio() {
        let features = extractor().extract("THIS GOES hard");
        assert_eq!(features.caps_word_count, 2);
        assert!((features.caps_ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fire_emoji_weighs_heaviest() {
        let features = extractor().extract("\u{1F525}\u{1F525}\u{1F525}");
        assert_eq!(features.fire_emoji_count, 3);
        assert_eq!(features.total_emoji_count, 3);
        assert!((features.booster_score - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_urgency_words() {
        let features = extractor().extract("we need the album now already");
        assert_eq!(features.urgency_count, 2);
        assert!((features.booster_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_booster_score_is_clamped() {
        let features = extractor().extract("!!!!!!!!!! \u{1F525}\u{1F525}\u{1F525}\u{1F525}\u{1F525} NOW NOW");
        assert!((features.booster_score - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_as_map_round_trip() {
        let features = extractor().extract("THIS \u{1F525}!");
        let map = features.as_map();
        assert_eq!(map["caps_word_count"], 1.0);
        assert_eq!(map["fire_emoji_count"], 1.0);
        assert_eq!(map["exclamation_count"], 1.0);
        assert!((map["booster_score"] - features.booster_score).abs() < f64::EPSILON);
    }
}
