use serde::{Deserialize, Serialize};

/// The release/format category of a video, distinct from the song's artist
/// or title.
///
/// The serialized labels are a fixed vocabulary consumed by downstream ETL
/// columns and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VersionType {
    #[serde(rename = "Official Music Video")]
    OfficialMusicVideo,
    #[serde(rename = "Official Audio")]
    OfficialAudio,
    #[serde(rename = "Lyric Video")]
    LyricVideo,
    #[serde(rename = "Live Performance")]
    LivePerformance,
    #[serde(rename = "Acoustic")]
    Acoustic,
    #[serde(rename = "Chopped and Screwed")]
    ChoppedAndScrewed,
    #[serde(rename = "Remix")]
    Remix,
    #[serde(rename = "On The Radar Performance")]
    OnTheRadarPerformance,
    #[serde(rename = "COLORS Performance")]
    ColorsPerformance,
    #[serde(rename = "VEVO DSCVR")]
    VevoDscvr,
    #[serde(rename = "Performance Video")]
    PerformanceVideo,
    #[serde(rename = "Live Session")]
    LiveSession,
    #[serde(rename = "Medley")]
    Medley,
    #[serde(rename = "Multi-Song Performance")]
    MultiSongPerformance,
    /// Default when nothing more specific matches.
    #[serde(rename = "Audio")]
    #[default]
    Audio,
}

/// Canonical display labels for each [`VersionType`] variant, matching the
/// strings used in vocabulary files.
const VERSION_LABELS: &[(VersionType, &str)] = &[
    (VersionType::OfficialMusicVideo, "Official Music Video"),
    (VersionType::OfficialAudio, "Official Audio"),
    (VersionType::LyricVideo, "Lyric Video"),
    (VersionType::LivePerformance, "Live Performance"),
    (VersionType::Acoustic, "Acoustic"),
    (VersionType::ChoppedAndScrewed, "Chopped and Screwed"),
    (VersionType::Remix, "Remix"),
    (VersionType::OnTheRadarPerformance, "On The Radar Performance"),
    (VersionType::ColorsPerformance, "COLORS Performance"),
    (VersionType::VevoDscvr, "VEVO DSCVR"),
    (VersionType::PerformanceVideo, "Performance Video"),
    (VersionType::LiveSession, "Live Session"),
    (VersionType::Medley, "Medley"),
    (VersionType::MultiSongPerformance, "Multi-Song Performance"),
    (VersionType::Audio, "Audio"),
];

impl VersionType {
    /// The canonical label for this version type.
    #[must_use]
    pub fn label(self) -> &'static str {
        for &(v, label) in VERSION_LABELS {
            if v == self {
                return label;
            }
        }
        "Audio"
    }

    /// Parse a canonical label (case-insensitive). Returns `None` for
    /// unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        for &(v, canonical) in VERSION_LABELS {
            if canonical.eq_ignore_ascii_case(label) {
                return Some(v);
            }
        }
        None
    }
}

impl std::fmt::Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured attribution extracted from a video title and channel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    /// The song/content title with artist credits, version tags, and
    /// descriptors stripped. Never empty when the input title is non-empty.
    pub cleaned_title: String,

    /// Artists considered authoritative, deduped, insertion order preserved.
    pub primary_artists: Vec<String>,

    /// Artists introduced via feat./ft./featuring/with clauses.
    pub featured_artists: Vec<String>,

    /// Release/format category.
    pub version_type: VersionType,

    /// Present only when a live-broadcast pattern matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcaster: Option<String>,
}

impl ParsedTitle {
    /// A fail-closed result: the stripped raw title, no artists, default
    /// version.
    #[must_use]
    pub fn fallback(raw_title: &str) -> Self {
        Self {
            cleaned_title: raw_title.trim().to_string(),
            primary_artists: Vec::new(),
            featured_artists: Vec::new(),
            version_type: VersionType::Audio,
            broadcaster: None,
        }
    }

    /// Case-insensitive, order-preserving dedup of both artist lists, then
    /// removal of featured entries that already appear as primary.
    pub fn dedup_artists(&mut self) {
        dedup_preserving_order(&mut self.primary_artists);
        dedup_preserving_order(&mut self.featured_artists);
        let primary: Vec<String> = self
            .primary_artists
            .iter()
            .map(|a| a.to_lowercase())
            .collect();
        self.featured_artists
            .retain(|a| !primary.contains(&a.to_lowercase()));
    }
}

fn dedup_preserving_order(artists: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(artists.len());
    artists.retain(|a| {
        let key = a.to_lowercase();
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label_round_trip() {
        for &(v, label) in VERSION_LABELS {
            assert_eq!(v.label(), label);
            assert_eq!(VersionType::from_label(label), Some(v));
        }
    }

    #[test]
    fn test_version_from_label_case_insensitive() {
        assert_eq!(
            VersionType::from_label("official music video"),
            Some(VersionType::OfficialMusicVideo)
        );
        assert_eq!(
            VersionType::from_label("CHOPPED AND SCREWED"),
            Some(VersionType::ChoppedAndScrewed)
        );
    }

    #[test]
    fn test_version_from_label_unknown() {
        assert_eq!(VersionType::from_label("Director's Cut"), None);
    }

    #[test]
    fn test_version_default_is_audio() {
        assert_eq!(VersionType::default(), VersionType::Audio);
    }

    #[test]
    fn test_fallback_strips_whitespace() {
        let parsed = ParsedTitle::fallback("  Type Of Day  ");
        assert_eq!(parsed.cleaned_title, "Type Of Day");
        assert!(parsed.primary_artists.is_empty());
        assert_eq!(parsed.version_type, VersionType::Audio);
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let mut parsed = ParsedTitle::fallback("x");
        parsed.primary_artists = vec![
            "Lute".to_string(),
            "Cozz".to_string(),
            "LUTE".to_string(),
            "lute".to_string(),
        ];
        parsed.dedup_artists();
        assert_eq!(parsed.primary_artists, vec!["Lute", "Cozz"]);
    }

    #[test]
    fn test_dedup_removes_featured_overlap() {
        let mut parsed = ParsedTitle::fallback("x");
        parsed.primary_artists = vec!["Lute".to_string()];
        parsed.featured_artists = vec!["lute".to_string(), "Cozz".to_string()];
        parsed.dedup_artists();
        assert_eq!(parsed.featured_artists, vec!["Cozz"]);
    }
}
