//! Channel-name classification.
//!
//! Channel names carry the most reliable attribution signal the platform
//! offers (`<Artist> - Topic` auto-channels) and the least reliable one
//! (ripper/re-upload channels). The classifier checks the legitimate-channel
//! allow-list first; only then does the deny-list apply.

use regex::Regex;

use roster_core::{Result, TitleVocabulary};

use crate::rx;

#[derive(Debug)]
pub struct ChannelClassifier {
    legitimate: Vec<Regex>,
    rippers: Vec<Regex>,
    rx_suffix: Regex,
    stopwords: Vec<String>,
    max_artist_words: usize,
}

impl ChannelClassifier {
    /// Compile the channel pattern lists from the vocabulary.
    ///
    /// # Errors
    /// Returns an error if any configured pattern is invalid.
    pub fn new(vocab: &TitleVocabulary) -> Result<Self> {
        // Patterns match from the start of the channel name.
        let anchored = |p: &String| rx::compile_ci(&format!("^(?:{p})"));
        let legitimate = vocab
            .legitimate_channels
            .iter()
            .map(anchored)
            .collect::<Result<Vec<_>>>()?;
        let rippers = vocab
            .ripper_channels
            .iter()
            .map(anchored)
            .collect::<Result<Vec<_>>>()?;

        let suffixes = vocab
            .channel_suffixes
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let rx_suffix = rx::compile_ci(&format!(r"\s*(?:{suffixes})\s*$"))?;

        Ok(Self {
            legitimate,
            rippers,
            rx_suffix,
            stopwords: vocab.channel_stopwords.clone(),
            max_artist_words: vocab.channel_artist_max_words,
        })
    }

    /// Whether the channel looks like a ripper/unofficial reposting channel
    /// or a broadcaster. The allow-list short-circuits the deny-list.
    #[must_use]
    pub fn is_ripper(&self, channel: &str) -> bool {
        if channel.is_empty() {
            return false;
        }
        if self.legitimate.iter().any(|p| p.is_match(channel)) {
            return false;
        }
        self.rippers.iter().any(|p| p.is_match(channel))
    }

    /// Extract the artist name from a `<Artist> - Topic` auto-channel.
    #[must_use]
    pub fn topic_artist(&self, channel: &str) -> Option<String> {
        const SUFFIX: &str = " - topic";
        if !channel.to_lowercase().ends_with(SUFFIX) {
            return None;
        }
        let cut = channel.len().checked_sub(SUFFIX.len())?;
        if !channel.is_char_boundary(cut) {
            return None;
        }
        let artist = channel[..cut].trim();
        if artist.is_empty() {
            None
        } else {
            Some(artist.to_string())
        }
    }

    /// Use the channel name itself as the artist, when it plausibly is one:
    /// not a ripper, short after stripping VEVO/Official/label suffixes,
    /// and free of channel-ish stopwords.
    #[must_use]
    pub fn fallback_artist(&self, channel: &str) -> Option<String> {
        if channel.is_empty() || self.is_ripper(channel) {
            return None;
        }
        let stripped = self.rx_suffix.replace_all(channel, "").trim().to_string();
        if stripped.is_empty() {
            return None;
        }
        if stripped.split_whitespace().count() > self.max_artist_words {
            return None;
        }
        let lower = stripped.to_lowercase();
        if self.stopwords.iter().any(|w| lower.contains(w.as_str())) {
            return None;
        }
        Some(stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ChannelClassifier {
        ChannelClassifier::new(&TitleVocabulary::default()).unwrap()
    }

    #[test]
    fn test_vevo_channels_are_legitimate() {
        let c = classifier();
        assert!(!c.is_ripper("LuteVEVO"));
        assert!(!c.is_ripper("rapperbigpoohVEVO"));
    }

    #[test]
    fn test_allow_list_beats_deny_list() {
        // "Emanny Music" would match the generic lyrics/music deny patterns
        // if the allow-list were not consulted first.
        let c = classifier();
        assert!(!c.is_ripper("Emanny Music"));
    }

    #[test]
    fn test_known_rippers() {
        let c = classifier();
        assert!(c.is_ripper("Cardinal Music"));
        assert!(c.is_ripper("Old For This"));
        assert!(c.is_ripper("Baby Demon Lyrics HD"));
    }

    #[test]
    fn test_broadcasters_are_rippers() {
        let c = classifier();
        assert!(c.is_ripper("SiriusXM"));
        assert!(c.is_ripper("BBC Radio 1Xtra"));
        assert!(c.is_ripper("Hot 97"));
    }

    #[test]
    fn test_generic_suffix_patterns() {
        let c = classifier();
        assert!(c.is_ripper("Bleakk TV"));
        assert!(c.is_ripper("Mass Appeal Records"));
        assert!(c.is_ripper("SomeArbitraryChannel"));
        assert!(c.is_ripper("WorldStar Entertainment"));
    }

    #[test]
    fn test_plain_artist_names_are_not_rippers() {
        let c = classifier();
        assert!(!c.is_ripper("Tha Realness"));
        assert!(!c.is_ripper("RYAN DESTINY"));
    }

    #[test]
    fn test_topic_artist() {
        let c = classifier();
        assert_eq!(
            c.topic_artist("B.J. The Chicago Kid - Topic").as_deref(),
            Some("B.J. The Chicago Kid")
        );
        assert_eq!(
            c.topic_artist("Steve Roxx - topic").as_deref(),
            Some("Steve Roxx")
        );
        assert!(c.topic_artist("LuteVEVO").is_none());
        assert!(c.topic_artist(" - Topic").is_none());
    }

    #[test]
    fn test_fallback_artist_strips_suffixes() {
        let c = classifier();
        assert_eq!(c.fallback_artist("LuteVEVO").as_deref(), Some("Lute"));
        assert_eq!(
            c.fallback_artist("Emanny Music").as_deref(),
            Some("Emanny")
        );
    }

    #[test]
    fn test_fallback_artist_rejects_rippers_and_long_names() {
        let c = classifier();
        assert!(c.fallback_artist("Cardinal Music").is_none());
        assert!(c
            .fallback_artist("Some Very Long Channel Name Here")
            .is_none());
    }

    #[test]
    fn test_fallback_artist_keeps_short_plain_names() {
        let c = classifier();
        assert_eq!(
            c.fallback_artist("Tha Realness").as_deref(),
            Some("Tha Realness")
        );
    }
}
