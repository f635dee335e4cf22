//! Version-type classification.
//!
//! An ordered regex table maps title text to the fixed version vocabulary.
//! Bootleg "slowed + reverb" uploads that spell the title in unicode
//! mathematical characters to evade detection are caught first by script-run
//! detection.

use regex::Regex;

use roster_core::vocab::VersionRule;
use roster_core::{Error, Result, VersionType};

use crate::normalize::fold_text;
use crate::rx;

/// Separators tried when looking for a trailing version tag.
const TAG_SEPARATORS: &[&str] = &[" - ", " \u{2013} ", " \u{2014} ", " | ", ": "];

#[derive(Debug)]
pub struct VersionClassifier {
    script_runs: Vec<Regex>,
    rules: Vec<(Regex, VersionType)>,
    rx_group: Regex,
}

impl VersionClassifier {
    /// Compile the ordered version table from the vocabulary.
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or a label is not in the
    /// version vocabulary.
    pub fn new(rules: &[VersionRule]) -> Result<Self> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let version = VersionType::from_label(&rule.label).ok_or_else(|| {
                    Error::InvalidData(format!("unknown version label: {}", rule.label))
                })?;
                Ok((rx::compile_ci(&rule.pattern)?, version))
            })
            .collect::<Result<Vec<_>>>()?;

        // Mathematical alphanumerics, double-struck, and letterlike symbol
        // runs used by slowed/reverb bootleg uploads.
        let script_runs = vec![
            rx::compile(r"[\u{1D400}-\u{1D7FF}]{2,}")?,
            rx::compile(r"[\u{2102}-\u{214F}]{2,}")?,
        ];

        Ok(Self {
            script_runs,
            rules: compiled,
            rx_group: rx::compile(r"[\(\[]([^\)\]]+)[\)\]]")?,
        })
    }

    /// Classify a title (and optionally its channel) into a version type.
    ///
    /// Falls back to `Official Audio` for Topic channels, else `Audio`.
    #[must_use]
    pub fn classify(&self, title: &str, channel: Option<&str>) -> VersionType {
        if self.script_runs.iter().any(|p| p.is_match(title)) {
            return VersionType::ChoppedAndScrewed;
        }

        let normalized = fold_text(&title.to_lowercase());
        if let Some(version) = self.match_rules(&normalized) {
            return version;
        }

        if channel
            .map(|c| c.to_lowercase().contains("- topic"))
            .unwrap_or(false)
        {
            return VersionType::OfficialAudio;
        }

        VersionType::Audio
    }

    /// Strip a recognized version tag out of a title.
    ///
    /// Looks inside bracketed groups first, then after a separator, and
    /// returns the remaining title together with the detected version.
    /// When nothing specific is found the title passes through unchanged
    /// and the version falls back to [`Self::classify`] on the whole text.
    #[must_use]
    pub fn split_version_tag(&self, title: &str, channel: Option<&str>) -> (String, VersionType) {
        let cleaned = fold_text(title);
        if cleaned.is_empty() {
            return (String::new(), VersionType::Audio);
        }

        for caps in self.rx_group.captures_iter(&cleaned) {
            if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
                if let Some(version) = self.match_rules(&inner.as_str().to_lowercase()) {
                    let mut remainder = String::with_capacity(cleaned.len());
                    remainder.push_str(&cleaned[..whole.start()]);
                    remainder.push_str(&cleaned[whole.end()..]);
                    return (
                        crate::normalize::collapse_whitespace(&remainder),
                        version,
                    );
                }
            }
        }

        for separator in TAG_SEPARATORS {
            if let Some(idx) = cleaned.find(separator) {
                let rhs = &cleaned[idx + separator.len()..];
                if let Some(version) = self.match_rules(&rhs.to_lowercase()) {
                    return (cleaned[..idx].trim().to_string(), version);
                }
            }
        }

        let version = self.classify(&cleaned, channel);
        (cleaned, version)
    }

    fn match_rules(&self, lowered: &str) -> Option<VersionType> {
        for (pattern, version) in &self.rules {
            if pattern.is_match(lowered) {
                return Some(*version);
            }
        }
        None
    }
}

/// Whether a video is a lyric video, judged from its title and description.
#[must_use]
pub fn is_lyric_video(title: &str, description: Option<&str>) -> bool {
    const INDICATORS: &[&str] = &["lyric", "lyrics", "with lyrics", "official lyrics"];
    if title.is_empty() {
        return false;
    }
    let title_lower = title.to_lowercase();
    if INDICATORS.iter().any(|i| title_lower.contains(i)) {
        return true;
    }
    if let Some(description) = description {
        let lower = description.to_lowercase();
        return INDICATORS.iter().any(|i| lower.contains(i));
    }
    false
}

/// Whether a video is an official music video, judged from its title and
/// channel.
#[must_use]
pub fn is_official_video(title: &str, channel: Option<&str>) -> bool {
    const INDICATORS: &[&str] = &[
        "official video",
        "official music video",
        "official mv",
        "official m/v",
    ];
    if title.is_empty() {
        return false;
    }
    let title_lower = title.to_lowercase();
    if INDICATORS.iter().any(|i| title_lower.contains(i)) {
        return true;
    }
    channel
        .map(|c| {
            let lower = c.to_lowercase();
            lower.contains("vevo") || lower.contains("official")
        })
        .unwrap_or(false)
}
