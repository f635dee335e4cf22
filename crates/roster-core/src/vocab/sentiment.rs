use serde::{Deserialize, Serialize};

/// Keyword and pattern tables for the comment analysis engine.
///
/// Keyword membership is substring-based over the lowercased comment, so
/// multi-word phrases ("goes hard", "car test") are valid entries. The AAVE
/// praise list and the negative indicator list are hand-curated and
/// culturally sensitive; the engine guarantees only the evaluation order
/// (praise list before negative list), never the list contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    /// Enthusiasm markers, slang praise, and engagement indicators.
    #[serde(default = "default_positive_boosters")]
    pub positive_boosters: Vec<String>,

    /// Explicit negative indicators; any hit short-circuits to negative
    /// unless an AAVE praise term matched first.
    #[serde(default = "default_negative_indicators")]
    pub negative_indicators: Vec<String>,

    /// In-group praise expressions checked before the negative list.
    #[serde(default = "default_aave_praise")]
    pub aave_praise: Vec<String>,

    /// Request-intent regex library (album, content, performance requests).
    #[serde(default = "default_request_patterns")]
    pub request_patterns: Vec<String>,

    /// Keywords marking engagement intent.
    #[serde(default = "default_engagement_words")]
    pub engagement_words: Vec<String>,

    /// Regex for urgency words feeding the booster score.
    #[serde(default = "default_urgency_pattern")]
    pub urgency_pattern: String,

    /// WH-question regexes marking info-seeking intent.
    #[serde(default = "default_info_patterns")]
    pub info_patterns: Vec<String>,

    /// Aspect keywords: production/beat.
    #[serde(default = "default_beat_words")]
    pub beat_words: Vec<String>,

    /// Aspect keywords: lyrics/vocals.
    #[serde(default = "default_lyric_words")]
    pub lyric_words: Vec<String>,

    /// Aspect keywords: release/marketing.
    #[serde(default = "default_rollout_words")]
    pub rollout_words: Vec<String>,

    /// Aspect keywords: the artist/performer.
    #[serde(default = "default_artist_words")]
    pub artist_words: Vec<String>,

    /// Regexes marking appreciation of the beat specifically.
    #[serde(default = "default_beat_appreciation_patterns")]
    pub beat_appreciation_patterns: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive_boosters: default_positive_boosters(),
            negative_indicators: default_negative_indicators(),
            aave_praise: default_aave_praise(),
            request_patterns: default_request_patterns(),
            engagement_words: default_engagement_words(),
            urgency_pattern: default_urgency_pattern(),
            info_patterns: default_info_patterns(),
            beat_words: default_beat_words(),
            lyric_words: default_lyric_words(),
            rollout_words: default_rollout_words(),
            artist_words: default_artist_words(),
            beat_appreciation_patterns: default_beat_appreciation_patterns(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_positive_boosters() -> Vec<String> {
    strings(&[
        // Enthusiasm markers
        "fire",
        "lit",
        "slaps",
        "bangs",
        "hits",
        "goes hard",
        "hard af",
        "sick",
        "crazy",
        "insane",
        "wild",
        "dope",
        "clean",
        // Gen Z slang
        "slay",
        "periodt",
        "no cap",
        "ate that",
        "understood the assignment",
        "hits different",
        "chef's kiss",
        "you slid",
        "sheeeesh",
        // AAVE and in-group praise
        "snapped",
        "went off",
        "ate",
        "served",
        "killed it",
        "bodied",
        "my nigga",
        "this nigga",
        "bro snapped",
        "sis ate",
        // Music-specific praise
        "bop",
        "anthem",
        "vibe",
        "mood",
        "energy",
        "talent",
        "vocals",
        "harmonies",
        "production",
        "mixing",
        // Engagement indicators
        "playlist",
        "repeat",
        "loop",
        "obsessed",
        "addicted",
        "car test",
        "gym playlist",
        "study music",
    ])
}

fn default_negative_indicators() -> Vec<String> {
    strings(&[
        "mid",
        "trash",
        "garbage",
        "wack",
        "overrated",
        "underrated",
        "flop",
        "boring",
        "generic",
        "basic",
        "cringe",
        "who approved this",
        "went double wood",
        "fell off",
    ])
}

fn default_aave_praise() -> Vec<String> {
    strings(&[
        "snapped",
        "ate",
        "served",
        "killed it",
        "bodied",
        "went off",
        "my nigga",
        "this nigga",
        "bro snapped",
        "sis ate",
        "he snapped",
        "she snapped",
    ])
}

fn default_request_patterns() -> Vec<String> {
    strings(&[
        // Album/release requests
        r"\b(drop|release|put out)\s+(the\s+)?(album|ep|mixtape|single)",
        r"\b(we\s+)?(need|want|waiting for)\s+(the\s+)?(album|new music)",
        r"\bwhen\s+(is\s+)?(the\s+)?(album|ep|new music)",
        // Content requests
        r"\b(drop|post|upload)\s+(the\s+)?(visuals?|video|mv)",
        r"\b(need|want)\s+(the\s+)?(lyrics|instrumental|clean version)",
        r"\bwho\s+(produced|mixed|made)\s+this",
        r"\bwhat'?s\s+the\s+sample",
        // Performance requests
        r"\b(come\s+to|tour|concert|show)\s+\w+",
        r"\bplease\s+come\s+to\s+\w+",
        // Urgent variants
        r"\bvisuals?\s+when",
        r"\bthese\s+lyrics",
        r"\bpost\s+the\s+link",
        r"\bdrop.*already",
        r"\bneed.*now",
    ])
}

fn default_engagement_words() -> Vec<String> {
    strings(&["playlist", "repeat", "loop", "car test", "gym"])
}

fn default_urgency_pattern() -> String {
    r"\b(now|already|asap|please{2,})\b".to_string()
}

fn default_info_patterns() -> Vec<String> {
    strings(&[r"\bwho\s", r"\bwhat\s", r"\bhow\s", r"\bwhere\s", r"\bwhen\s"])
}

fn default_beat_words() -> Vec<String> {
    strings(&[
        "beat",
        "production",
        "produced",
        "mixed",
        "sample",
        "instrumental",
        "bass",
        "drums",
    ])
}

fn default_lyric_words() -> Vec<String> {
    strings(&[
        "lyrics", "words", "bars", "verse", "chorus", "hook", "singing", "vocals",
    ])
}

fn default_rollout_words() -> Vec<String> {
    strings(&[
        "album", "drop", "release", "tour", "concert", "video", "visual",
    ])
}

fn default_artist_words() -> Vec<String> {
    strings(&["artist", "singer", "rapper", "talent", "voice", "style"])
}

fn default_beat_appreciation_patterns() -> Vec<String> {
    strings(&[
        r"\bbeat\b.*\b(fire|sick|hard|crazy|insane)\b",
        r"\b(fire|sick|hard|crazy|insane)\b.*\bbeat\b",
        r"\bproduction\b.*\b(fire|sick|hard|crazy|insane)\b",
        r"\binstrumental\b.*\b(fire|sick|hard|crazy|insane)\b",
        r"\bdrums?\b.*\b(fire|sick|hard|crazy|insane)\b",
        r"\bbass\b.*\b(fire|sick|hard|crazy|insane)\b",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_populated() {
        let lexicon = SentimentLexicon::default();
        assert!(!lexicon.positive_boosters.is_empty());
        assert!(!lexicon.negative_indicators.is_empty());
        assert!(!lexicon.aave_praise.is_empty());
        assert!(!lexicon.request_patterns.is_empty());
        assert!(!lexicon.beat_appreciation_patterns.is_empty());
    }

    #[test]
    fn test_aave_terms_also_count_as_positive() {
        // Every in-group praise term should contribute to the positive
        // keyword score as well, not just override the negative check.
        let lexicon = SentimentLexicon::default();
        for term in ["snapped", "ate", "bodied", "went off"] {
            assert!(lexicon.aave_praise.iter().any(|t| t == term));
            assert!(lexicon.positive_boosters.iter().any(|t| t == term));
        }
    }

    #[test]
    fn test_keyword_lists_are_lowercase() {
        let lexicon = SentimentLexicon::default();
        for word in lexicon
            .positive_boosters
            .iter()
            .chain(&lexicon.negative_indicators)
            .chain(&lexicon.aave_praise)
        {
            assert_eq!(word, &word.to_lowercase());
        }
    }
}
