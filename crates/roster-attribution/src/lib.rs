//! Title parsing and artist attribution for roster.
//!
//! Takes unreliable, free-text video titles and channel names and extracts
//! the canonical song title, primary and featured artists, and the
//! version/release type. The engine is a chain of ordered matchers: cheap
//! generic rules run last so they cannot shadow the specific ones, and a
//! parse that matches nothing degrades to the stripped raw title instead of
//! failing.
//!
//! All patterns compile at construction ([`TitleAttributionEngine::new`]);
//! parsing itself never fails and holds no state, so a single engine can be
//! shared freely across threads.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod channel;
pub mod engine;
pub mod matchers;
pub mod matching;
pub mod normalize;
mod rx;
pub mod similarity;
pub mod version;

pub use engine::TitleAttributionEngine;
pub use matching::{match_catalog, CatalogEntry, CatalogMatch};
pub use similarity::{
    scorer, EditDistanceScorer, SimilarityScorer, SimilarityStrategy, TokenSetScorer,
};
pub use version::{is_lyric_video, is_official_video, VersionClassifier};
