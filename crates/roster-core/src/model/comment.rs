use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overall polarity of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// What the commenter is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// "this is fire!", "love this"
    Praise,
    /// "drop the album", "need lyrics"
    Request,
    /// "what's the sample?", "who produced this?"
    Info,
    /// "mid", "overrated"
    Critique,
    /// "on my playlist", "car test"
    Engagement,
}

/// What part of the music the comment is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Artist,
    Beat,
    Lyrics,
    Rollout,
    General,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl Intent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Praise => "praise",
            Self::Request => "request",
            Self::Info => "info",
            Self::Critique => "critique",
            Self::Engagement => "engagement",
        }
    }
}

impl Aspect {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Beat => "beat",
            Self::Lyrics => "lyrics",
            Self::Rollout => "rollout",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multi-task analysis of a single comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    pub sentiment: Sentiment,

    /// Calibrated confidence in `[0, 1]`.
    pub confidence: f64,

    pub intent: Intent,

    pub aspect: Aspect,

    /// Stylistic intensity magnitude, clamped to `[0, 4.0]`.
    pub booster_score: f64,

    /// Whether the comment appreciates the beat/production specifically.
    pub beat_appreciation: bool,

    /// Diagnostic feature values (counts and ratios from the booster
    /// extractor). Not required for correctness.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, f64>,

    /// Human-readable rationale for which rule fired.
    pub explanation: String,
}

impl CommentAnalysis {
    /// The analysis of an empty or whitespace-only comment.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
            intent: Intent::Info,
            aspect: Aspect::General,
            booster_score: 0.0,
            beat_appreciation: false,
            features: BTreeMap::new(),
            explanation: "Empty comment".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strings() {
        assert_eq!(Sentiment::Positive.as_str(), "positive");
        assert_eq!(Intent::Engagement.as_str(), "engagement");
        assert_eq!(Aspect::Rollout.as_str(), "rollout");
    }

    #[test]
    fn test_empty_analysis_defaults() {
        let analysis = CommentAnalysis::empty();
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.intent, Intent::Info);
        assert_eq!(analysis.aspect, Aspect::General);
        assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
        assert!(analysis.booster_score.abs() < f64::EPSILON);
        assert!(!analysis.beat_appreciation);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Sentiment::Negative.to_string(), "negative");
        assert_eq!(Intent::Critique.to_string(), "critique");
        assert_eq!(Aspect::General.to_string(), "general");
    }
}
