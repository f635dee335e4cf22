//! Special-case title matchers.
//!
//! Each matcher recognizes one structural shape of human-authored title and
//! commits a full parse when it fires. The engine evaluates them in a fixed
//! precedence order; the order is the design asset, so every matcher here
//! is independently callable and unit-tested rule-by-rule.

use regex::Regex;

use roster_core::{ParsedTitle, Result, VersionType};

use crate::normalize::collapse_whitespace;
use crate::rx;

/// Words that disqualify a candidate artist block outright.
const NON_ARTIST_WORDS: &[&str] = &[
    "official", "music", "video", "hd", "hq", "audio", "lyrics", "vevo",
];

/// Words that disqualify a quoted-title lead token from being an artist.
const QUOTED_LEAD_STOPWORDS: &[&str] = &["official", "music", "channel", "video"];

#[derive(Debug)]
pub struct Matchers {
    rx_medley: Regex,
    rx_medley_songs: Regex,
    rx_word_live: Regex,
    rx_word_medley: Regex,
    rx_live: Regex,
    rx_live_residue: Regex,
    rx_possessive: Regex,
    rx_label: Regex,
    rx_label_possessive: Regex,
    rx_comma_pair: Regex,
    rx_artist_list: Regex,
    rx_quoted: Regex,
    rx_feat: Regex,
    rx_with: Regex,
    rx_feat_block: Regex,
    rx_delims: Regex,
    rx_number: Regex,
}

impl Matchers {
    /// Compile the structural matcher patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile (programmer error;
    /// these are not configuration-driven).
    pub fn new() -> Result<Self> {
        Ok(Self {
            rx_medley: rx::compile(
                r#"(\w+(?:\s+\w+)*)\s*["\u{201C}\u{201D}]([^"\u{201C}\u{201D}]+)["\u{201C}\u{201D}]"#,
            )?,
            rx_medley_songs: rx::compile_ci(r"\s*(?:,|&|\sand\s)\s*")?,
            rx_word_live: rx::compile_ci(r"\blive\b")?,
            rx_word_medley: rx::compile_ci(r"\bmedley\b")?,
            rx_live: rx::compile_ci(
                r"^([A-Za-z\s&.']+)\s*[\u{2014}-]\s*([^|]+)(?:\s*\|\s*live\s*performance)?(?:\s*\|\s*(.+))?$",
            )?,
            rx_live_residue: rx::compile_ci(r"\s*\|\s*live\s*performance.*$")?,
            rx_possessive: rx::compile_ci(
                r"^([A-Za-z0-9\s&.']+)'s\s+(?:song|track|tune|single|record|release|video)\s+(.+)$",
            )?,
            rx_label: rx::compile_ci(r"(.+?)\s+with\s+the\s+label\s+(.+)$")?,
            rx_label_possessive: rx::compile_ci(
                r"^([A-Za-z0-9\s&.']+)'s\s+(?:song|track|tune|single)\s+(.+)$",
            )?,
            rx_comma_pair: rx::compile(
                r#"^([A-Za-z0-9\s&.']{1,15}),\s+([A-Za-z0-9\s&.']{1,15})\s+([A-Za-z0-9\s'"]{3,})(?:\s+[Ll]yrics?)?$"#,
            )?,
            rx_artist_list: rx::compile(
                r#"^([A-Za-z0-9\s&.,']+?)(\s+)([A-Z][A-Za-z0-9\s'"]+?)(?:\s+[Ll]yrics?)?$"#,
            )?,
            rx_quoted: rx::compile(r#"^([A-Za-z0-9\s&.']+?)\s*["']([^"']+)["']"#)?,
            rx_feat: rx::compile_ci(
                r"(?:\(|\[|\s+)(?:ft\.?|feat\.?|featuring)\s+([^\)\]]+)[\)\]]?",
            )?,
            rx_with: rx::compile_ci(r"(?:[\(\[]|\s-\s)\s*with\s+([^\)\]]+)")?,
            rx_feat_block: rx::compile_ci(r"(.+?)\s+(?:feat\.?|featuring|ft\.?)\s+(.+)")?,
            rx_delims: rx::compile_ci(r"\s*(?:,|&| and | x |/)\s*")?,
            rx_number: rx::compile(r"^\d+$")?,
        })
    }

    /// Split a block of text naming one or more artists into individual
    /// names, handling embedded featuring clauses and filtering obvious
    /// non-artist tokens.
    #[must_use]
    pub fn split_artist_block(&self, block: &str) -> Vec<String> {
        let block = block.trim();
        if block.is_empty() {
            return Vec::new();
        }

        // "Lute featuring Blakk Soul & Ari Lennox" flattens to all three.
        if let Some(caps) = self.rx_feat_block.captures(block) {
            let mut parts = self.split_delimited(&caps[1]);
            parts.extend(self.split_delimited(&caps[2]));
            return parts;
        }

        let parts = self.split_delimited(block);
        let filtered: Vec<String> = parts
            .iter()
            .filter(|p| {
                p.len() <= 50
                    && !NON_ARTIST_WORDS.contains(&p.to_lowercase().as_str())
                    && !self.rx_number.is_match(p)
            })
            .cloned()
            .collect();

        if filtered.is_empty() {
            parts
        } else {
            filtered
        }
    }

    fn split_delimited(&self, text: &str) -> Vec<String> {
        self.rx_delims
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Pull featuring and "with" clauses out of a title candidate.
    ///
    /// Returns the truncated title and the extracted artist names. The
    /// "with" clause only matches inside brackets or after a dash, so
    /// titles like "Sleep With The Light On" survive intact.
    #[must_use]
    pub fn extract_featured(&self, title: &str) -> (String, Vec<String>) {
        let mut featured = Vec::new();
        let mut current = title.to_string();

        for pattern in [&self.rx_feat, &self.rx_with] {
            if let Some(caps) = pattern.captures(&current) {
                if let (Some(whole), Some(names)) = (caps.get(0), caps.get(1)) {
                    featured.extend(self.split_artist_block(names.as_str()));
                    current = current[..whole.start()].trim().to_string();
                }
            }
        }

        (current, featured)
    }

    /// Detect a quoted multi-song performance:
    /// `Artist "Song A, Song B & Song C"`.
    ///
    /// The first song becomes the title; the rest fold into a
    /// `(with ...)` suffix so downstream catalog matching still finds the
    /// lead song.
    #[must_use]
    pub fn medley(&self, cleaned: &str) -> Option<ParsedTitle> {
        let caps = self.rx_medley.captures(cleaned)?;
        let artist = caps.get(1)?.as_str().trim();
        let songs: Vec<&str> = self
            .rx_medley_songs
            .split(caps.get(2)?.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if songs.len() < 2 {
            return None;
        }

        let title = format!("{} (with {})", songs[0], songs[1..].join(", "));
        let version = if self.rx_word_live.is_match(cleaned) {
            VersionType::LivePerformance
        } else if self.rx_word_medley.is_match(cleaned) {
            VersionType::Medley
        } else {
            VersionType::MultiSongPerformance
        };

        Some(ParsedTitle {
            cleaned_title: title,
            primary_artists: vec![artist.to_string()],
            featured_artists: Vec::new(),
            version_type: version,
            broadcaster: None,
        })
    }

    /// Detect a broadcast live performance:
    /// `Artist — Song | LIVE Performance | Broadcaster`.
    ///
    /// Only meaningful for ripper/broadcaster channels; the engine gates
    /// the call accordingly.
    #[must_use]
    pub fn live_broadcast(&self, cleaned: &str, channel: &str) -> Option<ParsedTitle> {
        let caps = self.rx_live.captures(cleaned)?;
        let artist = caps.get(1)?.as_str().trim();
        let song = caps.get(2)?.as_str();
        let broadcaster = caps
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| channel.to_string());

        let song = self.rx_live_residue.replace(song, "").trim().to_string();
        if artist.is_empty() || song.is_empty() {
            return None;
        }

        Some(ParsedTitle {
            cleaned_title: song,
            primary_artists: vec![artist.to_string()],
            featured_artists: Vec::new(),
            version_type: VersionType::LivePerformance,
            broadcaster: Some(broadcaster),
        })
    }

    /// Detect a possessive credit: `<Artist>'s song <Title>`.
    #[must_use]
    pub fn possessive(&self, cleaned: &str) -> Option<ParsedTitle> {
        let caps = self.rx_possessive.captures(cleaned)?;
        let primary = self.split_artist_block(caps.get(1)?.as_str());
        let mut title_part = caps.get(2)?.as_str().to_string();

        // The title remainder may itself carry a label credit.
        if let Some(label_caps) = self.rx_label.captures(&title_part) {
            if let Some(inner) = label_caps.get(1) {
                title_part = inner.as_str().to_string();
            }
        }

        let (title_part, featured) = self.extract_featured(&title_part);

        Some(ParsedTitle {
            cleaned_title: title_part,
            primary_artists: primary,
            featured_artists: featured,
            version_type: VersionType::Audio,
            broadcaster: None,
        })
    }

    /// Detect a label credit: `<song info> with the label <label>`.
    ///
    /// The label name is discarded entirely; it is a distributor, not an
    /// artist.
    #[must_use]
    pub fn label_credit(&self, cleaned: &str) -> Option<ParsedTitle> {
        let caps = self.rx_label.captures(cleaned)?;
        let song_info = caps.get(1)?.as_str();

        if song_info.contains('\'') && song_info.to_lowercase().contains("song") {
            if let Some(inner) = self.rx_label_possessive.captures(song_info) {
                if let (Some(artist), Some(title)) = (inner.get(1), inner.get(2)) {
                    return Some(ParsedTitle {
                        cleaned_title: title.as_str().to_string(),
                        primary_artists: self.split_artist_block(artist.as_str()),
                        featured_artists: Vec::new(),
                        version_type: VersionType::Audio,
                        broadcaster: None,
                    });
                }
            }
        }

        Some(ParsedTitle {
            cleaned_title: song_info.to_string(),
            primary_artists: Vec::new(),
            featured_artists: Vec::new(),
            version_type: VersionType::Audio,
            broadcaster: None,
        })
    }

    /// Detect artist names at the start of a separator-less title, as in
    /// `JID, EarthGang Sacrifices [Lyrics]`.
    ///
    /// There is no artist dictionary available at parse time, so this
    /// commits only when the candidate tokens are short and the remainder
    /// still looks like a song title.
    #[must_use]
    pub fn leading_artist_list(&self, cleaned: &str) -> Option<(Vec<String>, String)> {
        if let Some(caps) = self.rx_comma_pair.captures(cleaned) {
            let first = caps.get(1)?.as_str().trim();
            let second = caps.get(2)?.as_str().trim();
            let song = caps.get(3)?.as_str().trim();
            if first.len() > 1
                && second.len() > 1
                && first.split_whitespace().count() <= 3
                && second.split_whitespace().count() <= 3
                && !song.is_empty()
            {
                return Some((vec![first.to_string(), second.to_string()], song.to_string()));
            }
        }

        let caps = self.rx_artist_list.captures(cleaned)?;
        let block = caps.get(1)?.as_str().trim();
        let song = caps.get(3)?.as_str().trim();
        if !block.contains(',') && !block.to_lowercase().contains(" and ") {
            return None;
        }
        let artists: Vec<String> = self
            .split_artist_block(block)
            .into_iter()
            .filter(|a| a.len() > 1)
            .collect();
        if artists.is_empty() || song.is_empty() {
            return None;
        }
        Some((artists, song.to_string()))
    }

    /// Detect a quoted title with a leading artist token:
    /// `Artist "Quoted Title" (extra)`.
    #[must_use]
    pub fn quoted_title(&self, cleaned: &str) -> Option<(String, String)> {
        let caps = self.rx_quoted.captures(cleaned)?;
        let lead = caps.get(1)?.as_str().trim();
        let quoted = caps.get(2)?.as_str().trim();

        let lead_lower = lead.to_lowercase();
        if lead.split_whitespace().count() <= 3
            && !QUOTED_LEAD_STOPWORDS
                .iter()
                .any(|w| lead_lower.contains(w))
            && !quoted.is_empty()
        {
            Some((lead.to_string(), quoted.to_string()))
        } else {
            None
        }
    }

    /// Tidy a committed title: collapse whitespace and trim stray quotes
    /// and dashes left over from clause extraction.
    #[must_use]
    pub fn tidy_title(&self, title: &str) -> String {
        collapse_whitespace(title)
            .trim_matches(|c| c == ' ' || c == '"' || c == '\'' || c == '-')
            .to_string()
    }
}
