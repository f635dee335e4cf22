//! Intent and aspect classification.
//!
//! Both classifiers are ordered first-match-wins keyword/regex rules over
//! the lowercased comment. Keyword membership is substring-based so
//! multi-word phrases match naturally.

use regex::Regex;

use roster_core::{Aspect, Intent, Result, SentimentLexicon};

use crate::rx;

/// Substring membership over a keyword list.
pub(crate) fn contains_any(text_lower: &str, words: &[String]) -> bool {
    words.iter().any(|w| text_lower.contains(w.as_str()))
}

#[derive(Debug)]
pub struct IntentClassifier {
    request: Vec<Regex>,
    info: Vec<Regex>,
    negative: Vec<String>,
    positive: Vec<String>,
    engagement: Vec<String>,
}

impl IntentClassifier {
    /// Compile the intent rules from the lexicon.
    ///
    /// # Errors
    /// Returns an error if a configured pattern is invalid.
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self> {
        Ok(Self {
            request: compile_all(&lexicon.request_patterns)?,
            info: compile_all(&lexicon.info_patterns)?,
            negative: lexicon.negative_indicators.clone(),
            positive: lexicon.positive_boosters.clone(),
            engagement: lexicon.engagement_words.clone(),
        })
    }

    /// Classify intent. Precedence: request, critique, praise, engagement,
    /// info; the default leans praise only when boosters show enthusiasm.
    #[must_use]
    pub fn classify(&self, text_lower: &str, booster_score: f64) -> Intent {
        if self.request.iter().any(|p| p.is_match(text_lower)) {
            return Intent::Request;
        }
        if contains_any(text_lower, &self.negative) {
            return Intent::Critique;
        }
        if contains_any(text_lower, &self.positive) {
            return Intent::Praise;
        }
        if contains_any(text_lower, &self.engagement) {
            return Intent::Engagement;
        }
        if self.info.iter().any(|p| p.is_match(text_lower)) {
            return Intent::Info;
        }
        if booster_score > 0.5 {
            Intent::Praise
        } else {
            Intent::Info
        }
    }
}

#[derive(Debug)]
pub struct AspectClassifier {
    beat: Vec<String>,
    lyrics: Vec<String>,
    rollout: Vec<String>,
    artist: Vec<String>,
    beat_appreciation: Vec<Regex>,
}

impl AspectClassifier {
    /// Compile the aspect rules from the lexicon.
    ///
    /// # Errors
    /// Returns an error if a beat-appreciation pattern is invalid.
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self> {
        Ok(Self {
            beat: lexicon.beat_words.clone(),
            lyrics: lexicon.lyric_words.clone(),
            rollout: lexicon.rollout_words.clone(),
            artist: lexicon.artist_words.clone(),
            beat_appreciation: compile_all(&lexicon.beat_appreciation_patterns)?,
        })
    }

    /// Classify what the comment is about, most specific list first.
    #[must_use]
    pub fn classify(&self, text_lower: &str) -> Aspect {
        if contains_any(text_lower, &self.beat) {
            return Aspect::Beat;
        }
        if contains_any(text_lower, &self.lyrics) {
            return Aspect::Lyrics;
        }
        if contains_any(text_lower, &self.rollout) {
            return Aspect::Rollout;
        }
        if contains_any(text_lower, &self.artist) {
            return Aspect::Artist;
        }
        Aspect::General
    }

    /// Whether the comment appreciates the beat/production specifically.
    #[must_use]
    pub fn beat_appreciation(&self, text_lower: &str) -> bool {
        self.beat_appreciation.iter().any(|p| p.is_match(text_lower))
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| rx::compile(p)).collect()
}
