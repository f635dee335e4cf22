use serde::{Deserialize, Serialize};

/// An ordered regex-to-label pair for version-type classification.
///
/// Patterns are matched case-insensitively against the normalized title;
/// the first match wins, so more specific patterns must come first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRule {
    /// Regex matched against the lowercased, normalized title.
    pub pattern: String,

    /// Canonical version label (must parse via `VersionType::from_label`).
    pub label: String,
}

/// Pattern and keyword tables for the title attribution engine.
///
/// All regexes are compiled by the engine at construction; the lists here
/// are data, not logic. The thresholds at the bottom tune the separator
/// split guard and were calibrated against an observed channel/artist
/// dataset — treat changes as policy decisions, not bug fixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleVocabulary {
    /// Bracketed groups removed before any matcher runs: curated junk tags,
    /// bare dates, resolution markers, repost/premiere/exclusive notes.
    #[serde(default = "default_junk_descriptors")]
    pub junk_descriptors: Vec<String>,

    /// Channels that re-upload other artists' content, plus broadcasters.
    /// Matched from the start of the channel name, case-insensitively.
    #[serde(default = "default_ripper_channels")]
    pub ripper_channels: Vec<String>,

    /// Allow-list checked before the ripper patterns; a match here
    /// short-circuits the deny-list.
    #[serde(default = "default_legitimate_channels")]
    pub legitimate_channels: Vec<String>,

    /// Substrings that mark a featuring clause inside a candidate artist
    /// block.
    #[serde(default = "default_featuring_indicators")]
    pub featuring_indicators: Vec<String>,

    /// Common English words that suggest a separator LHS is a title
    /// fragment rather than an artist name.
    #[serde(default = "default_title_words")]
    pub title_words: Vec<String>,

    /// Separator tokens tried in order; the split happens at the earliest
    /// occurrence of any of them.
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,

    /// Suffixes stripped from a channel name before using it as an artist.
    #[serde(default = "default_channel_suffixes")]
    pub channel_suffixes: Vec<String>,

    /// Words that disqualify a stripped channel name from being an artist.
    #[serde(default = "default_channel_stopwords")]
    pub channel_stopwords: Vec<String>,

    /// Maximum word count for a separator LHS containing title words to
    /// still be accepted as an artist name.
    #[serde(default = "default_short_artist_max_words")]
    pub short_artist_max_words: usize,

    /// Maximum word count for a stripped channel name to be used as the
    /// fallback artist.
    #[serde(default = "default_channel_artist_max_words")]
    pub channel_artist_max_words: usize,

    /// Ordered version-type classification table.
    #[serde(default = "default_version_rules")]
    pub version_rules: Vec<VersionRule>,
}

impl Default for TitleVocabulary {
    fn default() -> Self {
        Self {
            junk_descriptors: default_junk_descriptors(),
            ripper_channels: default_ripper_channels(),
            legitimate_channels: default_legitimate_channels(),
            featuring_indicators: default_featuring_indicators(),
            title_words: default_title_words(),
            separators: default_separators(),
            channel_suffixes: default_channel_suffixes(),
            channel_stopwords: default_channel_stopwords(),
            short_artist_max_words: default_short_artist_max_words(),
            channel_artist_max_words: default_channel_artist_max_words(),
            version_rules: default_version_rules(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_junk_descriptors() -> Vec<String> {
    strings(&[
        r"\(ASOHH[^)]*\)",
        r"\(\d{1,2}\.\d{1,2}\.\d{2,4}\)",
        r"\(\d{4}\)",
        r"\(HD\)",
        r"\(HQ\)",
        r"\(4K\)",
        r"\(8K\)",
        r"\(Explicit\)",
        r"\(Clean\)",
        r"\([0-9]+[Kk]\)",
        r"\(.*?repost.*?\)",
        r"\(.*?premiere.*?\)",
        r"\(.*?exclusive.*?\)",
        r"\(.*?standout.*?\)",
        r"\[.*?standout.*?\]",
        r"\(.*?high.*?quality.*?\)",
    ])
}

fn default_ripper_channels() -> Vec<String> {
    strings(&[
        r".*lyrics?.*",
        // Confirmed reposting channels
        "Cardinal Music",
        "Old For This",
        "Bleakk TV",
        "MaxxMusic",
        "FUSION MUSIC",
        "ALPHA MUSIC",
        "Joann Media",
        "Baby Demon Lyrics.*",
        "DepthofSoundTV",
        // Broadcasters (radio stations, media companies)
        "SiriusXM",
        "iHeartRadio",
        "BBC Radio.*",
        "NPR.*",
        "Hot 97",
        "Power 105",
        r".*Radio.*Station.*",
        r".*FM$",
        r".*AM$",
        r".*Broadcasting.*",
        // Generic suffixes
        r".*TV$",
        r".*Beats$",
        r".*Sounds$",
        r".*Audio$",
        r".*Media$",
        r".*Entertainment$",
        r".*records?$",
        r".*channel$",
        r".*video[sz]?$",
        r".*productions?$",
        r".*studio[sz]?$",
        r".*label[sz]?$",
        r".*distribution$",
        r".*publishing$",
        r".*hub$",
        r".*network$",
        r".*content$",
    ])
}

fn default_legitimate_channels() -> Vec<String> {
    strings(&[
        // Validated artist-owned channel
        "Emanny Music",
        r".*VEVO$",
        r".*Official$",
    ])
}

fn default_featuring_indicators() -> Vec<String> {
    strings(&["feat", "feat.", "featuring", "ft", "ft.", "w/", "x", "&"])
}

fn default_title_words() -> Vec<String> {
    strings(&["with", "the", "and", "by", "in", "on", "at", "of", "for"])
}

fn default_separators() -> Vec<String> {
    strings(&[" - ", " – ", " — ", " | ", ": ", " // ", " /// "])
}

fn default_channel_suffixes() -> Vec<String> {
    strings(&["VEVO", "Official", "Music", "Records", "Recordings"])
}

fn default_channel_stopwords() -> Vec<String> {
    strings(&[
        "official",
        "music",
        "records",
        "recordings",
        "channel",
        "vevo",
    ])
}

fn default_short_artist_max_words() -> usize {
    2
}

fn default_channel_artist_max_words() -> usize {
    3
}

fn default_version_rules() -> Vec<VersionRule> {
    let table: &[(&str, &str)] = &[
        (r"\bofficial (music )?video\b", "Official Music Video"),
        (r"\bofficial audio\b", "Official Audio"),
        (r"\blyrics? video\b", "Lyric Video"),
        (r"\b(acoustic|unplugged)\b", "Acoustic"),
        (r"\blive( at| from)?\b", "Live Performance"),
        (r"\b(chopped.*screwed|slowed.*reverb)\b", "Chopped and Screwed"),
        (r"\b(remix|mashup)\b", "Remix"),
        (r"\bon the radar performance\b", "On The Radar Performance"),
        (r"\bcolors (show|performance)\b", "COLORS Performance"),
        (r"\bvevo dscvr\b", "VEVO DSCVR"),
        (r"\bperformance video\b", "Performance Video"),
        (r"\blive session\b", "Live Session"),
    ];
    table
        .iter()
        .map(|&(pattern, label)| VersionRule {
            pattern: pattern.to_string(),
            label: label.to_string(),
        })
        .collect()
}
