//! End-to-end parsing scenarios over real-world title shapes.

use roster_attribution::similarity::{
    scorer, EditDistanceScorer, SimilarityScorer, SimilarityStrategy, TokenSetScorer,
};
use roster_attribution::TitleAttributionEngine;
use roster_core::VersionType;

fn engine() -> TitleAttributionEngine {
    TitleAttributionEngine::with_defaults().unwrap()
}

#[test]
fn official_video_with_featured_artist() {
    let parsed = engine().parse_title("Lute - Eye to Eye ft. Cozz [Official Video]", Some("LuteVEVO"));
    assert_eq!(parsed.primary_artists, vec!["Lute"]);
    assert_eq!(parsed.featured_artists, vec!["Cozz"]);
    assert_eq!(parsed.cleaned_title, "Eye to Eye");
    assert_eq!(parsed.version_type, VersionType::OfficialMusicVideo);
}

#[test]
fn comma_joined_artist_list_before_separator() {
    let parsed = engine().parse_title(
        "Cantrell, Stro, 070 Phi, Liana Bank$ - When Morning Comes [HQ Audio]",
        None,
    );
    assert_eq!(
        parsed.primary_artists,
        vec!["Cantrell", "Stro", "070 Phi", "Liana Bank$"]
    );
    assert_eq!(parsed.cleaned_title, "When Morning Comes");
}

#[test]
fn topic_channel_is_authoritative_for_any_title() {
    let titles = [
        "Black Magic (feat. Akilz Amari)",
        "Some Completely Unrelated Text",
        "Wrong Artist - Song Name",
    ];
    for title in titles {
        let parsed = engine().parse_title(title, Some("B.J. The Chicago Kid - Topic"));
        assert_eq!(
            parsed.primary_artists,
            vec!["B.J. The Chicago Kid"],
            "title: {title}"
        );
    }
}

#[test]
fn no_separator_and_unusable_channel_yields_no_artists() {
    let parsed = engine().parse_title("Type Of Day", Some("SomeArbitraryChannel"));
    assert!(parsed.primary_artists.is_empty());
    assert!(parsed.featured_artists.is_empty());
    assert_eq!(parsed.cleaned_title, "Type Of Day");
    assert_eq!(parsed.version_type, VersionType::Audio);
}

#[test]
fn parse_is_deterministic() {
    let engine = engine();
    let cases = [
        ("Lute - Eye to Eye ft. Cozz [Official Video]", Some("LuteVEVO")),
        ("Type Of Day", None),
        ("Lute \"Eye to Eye, 100 & GED\" Live", Some("On The Radar")),
    ];
    for (title, channel) in cases {
        let first = engine.parse_title(title, channel);
        let second = engine.parse_title(title, channel);
        assert_eq!(first, second);
    }
}

#[test]
fn cleaned_title_is_never_empty_for_nonempty_input() {
    let engine = engine();
    let awkward = [
        "-",
        "\"\"",
        "(Official Video)",
        "[HQ]",
        "ft. Cozz",
        "   x   ",
    ];
    for title in awkward {
        let parsed = engine.parse_title(title, None);
        assert!(
            !parsed.cleaned_title.is_empty(),
            "empty cleaned title for input: {title:?}"
        );
    }
}

#[test]
fn artist_lists_are_deduped_case_insensitively() {
    let engine = engine();
    let parsed = engine.parse_title("Lute & LUTE & Cozz - Song ft. lute", Some("LuteVEVO"));
    let lowered: Vec<String> = parsed
        .primary_artists
        .iter()
        .map(|a| a.to_lowercase())
        .collect();
    let mut unique = lowered.clone();
    unique.dedup();
    assert_eq!(lowered.len(), unique.len());
    // Featured list must not repeat a primary artist.
    for featured in &parsed.featured_artists {
        assert!(!lowered.contains(&featured.to_lowercase()));
    }
}

#[test]
fn changes_with_featured_artist() {
    let parsed = engine().parse_title(
        "Lute - Changes ft. BJ The Chicago Kid [Official Video]",
        Some("LuteVEVO"),
    );
    assert_eq!(parsed.primary_artists, vec!["Lute"]);
    assert_eq!(parsed.featured_artists, vec!["BJ The Chicago Kid"]);
    assert_eq!(parsed.cleaned_title, "Changes");
    assert_eq!(parsed.version_type, VersionType::OfficialMusicVideo);
}

#[test]
fn similarity_is_symmetric_and_reflexive() {
    for s in [
        scorer(SimilarityStrategy::TokenSet),
        scorer(SimilarityStrategy::EditDistance),
    ] {
        for (a, b) in [
            ("Eye to Eye", "eye 2 eye"),
            ("GED", "GED (Gettin Every Dolla)"),
            ("", "something"),
        ] {
            assert!((s.similarity(a, b) - s.similarity(b, a)).abs() < 1e-9);
        }
        assert!((s.similarity("Preach", "Preach") - 100.0).abs() < f64::EPSILON);
    }
}

#[test]
fn both_scorers_rank_the_same_obvious_pair() {
    let token_set = TokenSetScorer;
    let edit = EditDistanceScorer;
    for s in [&token_set as &dyn SimilarityScorer, &edit] {
        let close = s.similarity("Gold Chain", "Gold Chains");
        let far = s.similarity("Gold Chain", "Completely Different Song");
        assert!(close > far);
    }
}
