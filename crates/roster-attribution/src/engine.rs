//! The title attribution engine.
//!
//! `parse_title` never fails: every rule that does not match falls through
//! to the next, and a title nothing matches degrades to the stripped raw
//! text with no artists and the default version. Precedence, first match
//! wins:
//!
//! 1. multi-song/medley quote
//! 2. live broadcast (ripper/broadcaster channels only)
//! 3. possessive credit (`Artist's song Title`)
//! 4. label credit (`... with the label ...`)
//! 5. artist list at title start
//! 6. quoted title with leading artist
//! 7. generic separator split (guarded), then featuring extraction,
//!    Topic-channel override, and channel-name fallback

use roster_core::{ParsedTitle, Result, TitleVocabulary};

use crate::channel::ChannelClassifier;
use crate::matchers::Matchers;
use crate::normalize::Normalizer;
use crate::version::VersionClassifier;

#[derive(Debug)]
pub struct TitleAttributionEngine {
    vocab: TitleVocabulary,
    normalizer: Normalizer,
    channels: ChannelClassifier,
    versions: VersionClassifier,
    matchers: Matchers,
}

impl TitleAttributionEngine {
    /// Build an engine from a vocabulary, compiling every pattern up front.
    ///
    /// # Errors
    /// Returns an error if any vocabulary pattern or version label is
    /// invalid.
    pub fn new(vocab: TitleVocabulary) -> Result<Self> {
        let normalizer = Normalizer::new(&vocab)?;
        let channels = ChannelClassifier::new(&vocab)?;
        let versions = VersionClassifier::new(&vocab.version_rules)?;
        let matchers = Matchers::new()?;
        Ok(Self {
            vocab,
            normalizer,
            channels,
            versions,
            matchers,
        })
    }

    /// Build an engine with the curated default vocabulary.
    ///
    /// # Errors
    /// Returns an error if the built-in vocabulary fails to compile, which
    /// would be a defect in the defaults themselves.
    pub fn with_defaults() -> Result<Self> {
        Self::new(TitleVocabulary::default())
    }

    /// The channel classifier, for callers that need the ripper/Topic
    /// signal on its own.
    #[must_use]
    pub fn channels(&self) -> &ChannelClassifier {
        &self.channels
    }

    /// The version classifier, callable independently of a full parse.
    #[must_use]
    pub fn versions(&self) -> &VersionClassifier {
        &self.versions
    }

    /// Parse a video title and channel name into a structured attribution.
    #[must_use]
    pub fn parse_title(&self, video_title: &str, channel_title: Option<&str>) -> ParsedTitle {
        let raw = video_title.trim();
        if raw.is_empty() {
            return ParsedTitle::fallback(video_title);
        }

        let text = self
            .normalizer
            .unwrap_csv_mangled(raw)
            .unwrap_or_else(|| raw.to_string());
        let normalized = self.normalizer.clean(&text);
        let mut cleaned = self.normalizer.strip_decorations(&normalized);
        if cleaned.is_empty() {
            cleaned = normalized;
        }
        if cleaned.is_empty() {
            return ParsedTitle::fallback(raw);
        }

        // Medley and live broadcast decide their own version; the rest get
        // the classifier's verdict on the raw title.
        if let Some(parsed) = self.matchers.medley(&cleaned) {
            log::debug!("medley rule matched: {cleaned}");
            return self.finalize(parsed, raw);
        }

        if let Some(channel) = channel_title {
            if self.channels.is_ripper(channel) {
                if let Some(parsed) = self.matchers.live_broadcast(&cleaned, channel) {
                    log::debug!("live-broadcast rule matched for channel {channel}");
                    return self.finalize(parsed, raw);
                }
            }
        }

        if let Some(mut parsed) = self.matchers.possessive(&cleaned) {
            log::debug!("possessive rule matched: {cleaned}");
            parsed.version_type = self.versions.classify(raw, channel_title);
            return self.finalize(parsed, raw);
        }

        if let Some(mut parsed) = self.matchers.label_credit(&cleaned) {
            log::debug!("label-credit rule matched: {cleaned}");
            parsed.version_type = self.versions.classify(raw, channel_title);
            return self.finalize(parsed, raw);
        }

        if let Some((artists, remainder)) = self.matchers.leading_artist_list(&cleaned) {
            log::debug!("leading-artist-list rule matched: {cleaned}");
            let (title_part, featured) = self.matchers.extract_featured(&remainder);
            let parsed = ParsedTitle {
                cleaned_title: title_part,
                primary_artists: artists,
                featured_artists: featured,
                version_type: self.versions.classify(raw, channel_title),
                broadcaster: None,
            };
            return self.finalize(parsed, raw);
        }

        if let Some((artist, quoted)) = self.matchers.quoted_title(&cleaned) {
            log::debug!("quoted-title rule matched: {cleaned}");
            let (title_part, featured) = self.matchers.extract_featured(&quoted);
            let parsed = ParsedTitle {
                cleaned_title: title_part,
                primary_artists: vec![artist],
                featured_artists: featured,
                version_type: self.versions.classify(raw, channel_title),
                broadcaster: None,
            };
            return self.finalize(parsed, raw);
        }

        // Generic path: separator split, featuring extraction, Topic
        // override, channel fallback.
        let (title_part, mut primary) = self.split_on_separator(&cleaned, channel_title);
        let (title_part, featured) = self.matchers.extract_featured(&title_part);

        if let Some(topic) = channel_title.and_then(|c| self.channels.topic_artist(c)) {
            // The Topic channel name is authoritative over any title guess.
            primary = vec![topic];
        }

        if primary.is_empty() {
            if let Some(artist) = channel_title.and_then(|c| self.channels.fallback_artist(c)) {
                primary = vec![artist];
            }
        }

        let parsed = ParsedTitle {
            cleaned_title: title_part,
            primary_artists: primary,
            featured_artists: featured,
            version_type: self.versions.classify(raw, channel_title),
            broadcaster: None,
        };
        self.finalize(parsed, raw)
    }

    /// Split at the earliest separator token, with guards against treating
    /// a title fragment or a ripper name as the artist.
    fn split_on_separator(&self, cleaned: &str, channel: Option<&str>) -> (String, Vec<String>) {
        let hit = self
            .vocab
            .separators
            .iter()
            .filter_map(|sep| cleaned.find(sep.as_str()).map(|idx| (idx, sep.as_str())))
            .min_by_key(|&(idx, _)| idx);

        let Some((idx, separator)) = hit else {
            return (cleaned.to_string(), Vec::new());
        };

        let lhs = cleaned[..idx].trim();
        let rhs = cleaned[idx + separator.len()..].trim();
        if lhs.is_empty() || rhs.is_empty() {
            return (cleaned.to_string(), Vec::new());
        }

        if self.channels.is_ripper(lhs) {
            // A ripper name left of the separator is not an artist.
            return (cleaned.to_string(), Vec::new());
        }

        let lhs_lower = lhs.to_lowercase();
        let has_title_words = self
            .vocab
            .title_words
            .iter()
            .any(|w| lhs_lower.contains(w.as_str()));

        if has_title_words {
            let short = lhs.split_whitespace().count() <= self.vocab.short_artist_max_words;
            let has_feat_indicator = self
                .vocab
                .featuring_indicators
                .iter()
                .any(|i| lhs_lower.contains(i.as_str()));

            if short && !has_feat_indicator {
                return (rhs.to_string(), self.matchers.split_artist_block(lhs));
            }

            // A word-level overlap with the channel name rescues the guess.
            let overlaps_channel = channel.map_or(false, |c| {
                let channel_lower = c.to_lowercase();
                lhs_lower
                    .split_whitespace()
                    .any(|part| channel_lower.contains(part))
            });
            if overlaps_channel {
                return (rhs.to_string(), self.matchers.split_artist_block(lhs));
            }

            // Likely a title fragment like "Sleep With The Light On".
            return (cleaned.to_string(), Vec::new());
        }

        (rhs.to_string(), self.matchers.split_artist_block(lhs))
    }

    /// Final cleanup shared by every committed parse.
    fn finalize(&self, mut parsed: ParsedTitle, raw: &str) -> ParsedTitle {
        parsed.cleaned_title = self.matchers.tidy_title(&parsed.cleaned_title);
        if parsed.cleaned_title.is_empty() {
            parsed.cleaned_title = raw.trim().to_string();
        }
        parsed.dedup_artists();
        parsed
    }
}
