//! The comment analysis engine.
//!
//! `analyze_comment` runs the booster extractor, the intent and aspect
//! classifiers, and then the sentiment policy table. The table is explicit
//! rather than a generic polarity sum: in-group praise is scored before the
//! negative keywords are consulted, a negative hit short-circuits, and the
//! positive/negative thresholds are asymmetric because fan comments skew
//! heavily positive.

use roster_core::{Aspect, CommentAnalysis, Intent, Result, Sentiment, SentimentLexicon};

use crate::classify::{contains_any, AspectClassifier, IntentClassifier};
use crate::features::BoosterExtractor;

/// Scoring weights for the sentiment policy.
const AAVE_PRAISE_BOOST: f64 = 1.0;
const POSITIVE_KEYWORD_WEIGHT: f64 = 0.5;
const BOOSTER_WEIGHT: f64 = 0.6;
const REQUEST_BOOST: f64 = 0.7;
const REQUEST_BOOSTER_FLOOR: f64 = 0.1;
const PRAISE_BOOST: f64 = 0.6;
const ENGAGEMENT_BOOST: f64 = 0.5;
const CRITIQUE_PENALTY: f64 = 0.6;

/// Asymmetric label thresholds for a positive-skewed domain.
const POSITIVE_THRESHOLD: f64 = 0.3;
const NEGATIVE_THRESHOLD: f64 = -0.4;
const NEGATIVE_KEYWORD_CONFIDENCE: f64 = 0.85;

#[derive(Debug)]
pub struct CommentAnalysisEngine {
    boosters: BoosterExtractor,
    intents: IntentClassifier,
    aspects: AspectClassifier,
    aave_praise: Vec<String>,
    negative_indicators: Vec<String>,
    positive_boosters: Vec<String>,
}

impl CommentAnalysisEngine {
    /// Build an engine from a lexicon, compiling every pattern up front.
    ///
    /// # Errors
    /// Returns an error if any lexicon pattern is invalid.
    pub fn new(lexicon: SentimentLexicon) -> Result<Self> {
        Ok(Self {
            boosters: BoosterExtractor::new(&lexicon)?,
            intents: IntentClassifier::new(&lexicon)?,
            aspects: AspectClassifier::new(&lexicon)?,
            aave_praise: lexicon.aave_praise,
            negative_indicators: lexicon.negative_indicators,
            positive_boosters: lexicon.positive_boosters,
        })
    }

    /// Build an engine with the curated default lexicon.
    ///
    /// # Errors
    /// Returns an error if the built-in lexicon fails to compile, which
    /// would be a defect in the defaults themselves.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SentimentLexicon::default())
    }

    /// Analyze a single comment. Never fails; empty or whitespace-only
    /// input gets the neutral default analysis.
    #[must_use]
    pub fn analyze_comment(&self, text: &str) -> CommentAnalysis {
        if text.trim().is_empty() {
            return CommentAnalysis::empty();
        }

        let features = self.boosters.extract(text);
        let text_lower = text.to_lowercase();

        let intent = self.intents.classify(&text_lower, features.booster_score);
        let aspect = self.aspects.classify(&text_lower);
        let (sentiment, confidence) =
            self.score_sentiment(&text_lower, intent, features.booster_score);
        log::debug!("comment classified {sentiment}/{intent}/{aspect} at {confidence:.2}");

        CommentAnalysis {
            sentiment,
            confidence,
            intent,
            aspect,
            booster_score: features.booster_score,
            beat_appreciation: self.aspects.beat_appreciation(&text_lower),
            explanation: explanation(sentiment, intent, aspect, features.booster_score),
            features: features.as_map(),
        }
    }

    /// Analyze a batch of comments in order.
    pub fn analyze_batch<'a, I>(&self, comments: I) -> Vec<CommentAnalysis>
    where
        I: IntoIterator<Item = &'a str>,
    {
        comments
            .into_iter()
            .map(|text| self.analyze_comment(text))
            .collect()
    }

    /// The sentiment policy table.
    ///
    /// In-group praise is checked before the negative keywords so slang
    /// like "snapped" is never flagged negative by keyword overlap; when no
    /// praise term matched, any negative keyword short-circuits. Otherwise
    /// the score accumulates positive keywords, boosters, and an
    /// intent-conditioned adjustment: a request with any enthusiasm reads
    /// positive, a plain request stays neutral.
    fn score_sentiment(
        &self,
        text_lower: &str,
        intent: Intent,
        booster_score: f64,
    ) -> (Sentiment, f64) {
        let mut score = 0.0;

        let aave_praise_found = contains_any(text_lower, &self.aave_praise);
        if aave_praise_found {
            score += AAVE_PRAISE_BOOST;
        } else if contains_any(text_lower, &self.negative_indicators) {
            return (Sentiment::Negative, NEGATIVE_KEYWORD_CONFIDENCE);
        }

        let positive_count = self
            .positive_boosters
            .iter()
            .filter(|w| text_lower.contains(w.as_str()))
            .count();
        score += positive_count as f64 * POSITIVE_KEYWORD_WEIGHT;
        score += booster_score * BOOSTER_WEIGHT;

        score += match intent {
            Intent::Request if booster_score > REQUEST_BOOSTER_FLOOR => REQUEST_BOOST,
            Intent::Request => 0.0,
            Intent::Praise => PRAISE_BOOST,
            Intent::Engagement => ENGAGEMENT_BOOST,
            Intent::Critique => -CRITIQUE_PENALTY,
            Intent::Info => 0.0,
        };

        if score >= POSITIVE_THRESHOLD {
            (Sentiment::Positive, (0.6 + score * 0.25).min(0.95))
        } else if score <= NEGATIVE_THRESHOLD {
            (Sentiment::Negative, (0.6 + score.abs() * 0.25).min(0.95))
        } else {
            (Sentiment::Neutral, 0.65 + score.abs() * 0.15)
        }
    }
}

/// Human-readable rationale for which rule fired.
fn explanation(sentiment: Sentiment, intent: Intent, aspect: Aspect, booster_score: f64) -> String {
    let mut parts = Vec::new();
    if booster_score > 0.5 {
        parts.push(format!("High intensity (boosters: {booster_score:.1})"));
    }
    if intent == Intent::Request && sentiment == Sentiment::Positive {
        parts.push("Request with enthusiasm".to_string());
    } else if intent == Intent::Request && sentiment == Sentiment::Neutral {
        parts.push("Plain request".to_string());
    }

    if parts.is_empty() {
        format!("{intent} about {aspect}")
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CommentAnalysisEngine {
        CommentAnalysisEngine::with_defaults().unwrap()
    }

    #[test]
    fn test_empty_comment_defaults() {
        let analysis = engine().analyze_comment("   ");
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.intent, Intent::Info);
        assert_eq!(analysis.aspect, Aspect::General);
        assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
        assert!(analysis.booster_score.abs() < f64::EPSILON);
        assert_eq!(analysis.explanation, "Empty comment");
    }

    #[test]
    fn test_negative_keyword_short_circuits() {
        let analysis = engine().analyze_comment("mid");
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!((analysis.confidence - 0.85).abs() < f64::EPSILON);
        assert_eq!(analysis.intent, Intent::Critique);
    }

    #[test]
    fn test_aave_praise_is_checked_before_negative_keywords() {
        // "went off" is praise even though a naive filter might flag the
        // surrounding slang; the praise list runs first.
        let analysis = engine().analyze_comment("my nigga snapped \u{1F525}\u{1F525}\u{1F525}");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_request_with_enthusiasm_is_positive() {
        let analysis = engine().analyze_comment("drop the album already!");
        assert_eq!(analysis.intent, Intent::Request);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.explanation.contains("Request with enthusiasm"));
    }

    #[test]
    fn test_plain_request_stays_neutral() {
        let analysis = engine().analyze_comment("drop the album");
        assert_eq!(analysis.intent, Intent::Request);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.explanation, "Plain request");
    }

    #[test]
    fn test_praise_intent_boost() {
        let analysis = engine().analyze_comment("this is fire");
        assert_eq!(analysis.intent, Intent::Praise);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_critique_without_negative_keyword_leans_negative() {
        // No negative keyword hit, so the critique penalty alone decides.
        let engine = engine();
        let (sentiment, _) = engine.score_sentiment("not feeling it", Intent::Critique, 0.0);
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_confidence_is_capped() {
        let analysis = engine().analyze_comment(
            "FIRE FIRE FIRE \u{1F525}\u{1F525}\u{1F525}\u{1F525} this slaps!!!",
        );
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.confidence <= 0.95);
    }

    #[test]
    fn test_beat_appreciation_flag() {
        let analysis = engine().analyze_comment("this beat is crazy");
        assert!(analysis.beat_appreciation);
        assert_eq!(analysis.aspect, Aspect::Beat);

        let analysis = engine().analyze_comment("great lyrics");
        assert!(!analysis.beat_appreciation);
    }

    #[test]
    fn test_high_intensity_explanation() {
        let analysis = engine().analyze_comment("THIS GOES HARD \u{1F525}");
        assert!(analysis.explanation.starts_with("High intensity"));
    }

    #[test]
    fn test_fallback_explanation_names_intent_and_aspect() {
        let analysis = engine().analyze_comment("okay then");
        assert_eq!(analysis.explanation, "info about general");
    }

    #[test]
    fn test_features_map_is_populated() {
        let analysis = engine().analyze_comment("nice one!");
        assert_eq!(analysis.features["exclamation_count"], 1.0);
        assert!((analysis.features["booster_score"] - analysis.booster_score).abs() < f64::EPSILON);
    }

    #[test]
    fn test_batch_preserves_order() {
        let results = engine().analyze_batch(["mid", "this is fire"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sentiment, Sentiment::Negative);
        assert_eq!(results[1].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_determinism() {
        let engine = engine();
        let a = engine.analyze_comment("we need the album now \u{1F525}");
        let b = engine.analyze_comment("we need the album now \u{1F525}");
        assert_eq!(a, b);
    }
}
