//! Matching parsed titles against a songs catalog.
//!
//! The catalog itself (and resolving a match into database identity) lives
//! with the caller; this module only scores a parsed title/artist pair
//! against candidate entries.

use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityScorer;

/// Minimum combined score for a match to be reported.
pub const MATCH_THRESHOLD: f64 = 50.0;

/// A candidate song from the caller's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,

    #[serde(default)]
    pub artists: Vec<String>,
}

/// The winning candidate and its combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    /// Index into the candidate slice.
    pub index: usize,

    /// Combined score in `[0, 100]`: 70% title similarity, 30% artist
    /// similarity.
    pub score: f64,
}

/// Score a parsed title and artist list against catalog candidates.
///
/// Candidates whose titles share no containment relation with the parsed
/// title are skipped outright; the rest are scored with a 0.7/0.3
/// title/artist weighting. Returns `None` when nothing reaches
/// [`MATCH_THRESHOLD`].
#[must_use]
pub fn match_catalog(
    scorer: &dyn SimilarityScorer,
    parsed_title: &str,
    parsed_artists: &[String],
    entries: &[CatalogEntry],
) -> Option<CatalogMatch> {
    let title = parsed_title.trim().to_lowercase();
    if title.is_empty() {
        return None;
    }

    let mut best: Option<CatalogMatch> = None;
    for (index, entry) in entries.iter().enumerate() {
        let entry_title = entry.title.trim().to_lowercase();
        if entry_title.is_empty() {
            continue;
        }
        if !title.contains(&entry_title) && !entry_title.contains(&title) {
            continue;
        }

        let title_score = scorer.similarity(&title, &entry_title);
        let artist_score = if parsed_artists.is_empty() || entry.artists.is_empty() {
            0.0
        } else {
            scorer.artist_list_similarity(parsed_artists, &entry.artists)
        };
        let score = title_score * 0.7 + artist_score * 0.3;

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(CatalogMatch { index, score });
        }
    }

    best.filter(|m| m.score >= MATCH_THRESHOLD)
}
