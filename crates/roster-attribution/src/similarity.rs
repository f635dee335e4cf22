//! Fuzzy string similarity for matching parsed output against a catalog.
//!
//! Two strategies implement the same trait: a token-set ratio that is
//! tolerant to word order and duplicates (the default), and a plain
//! normalized edit distance. Callers pick one at startup instead of
//! branching at call sites.

use std::collections::BTreeSet;

/// Which similarity algorithm to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityStrategy {
    /// Token-set ratio: tolerant to word order and repeated words.
    #[default]
    TokenSet,
    /// Plain normalized Levenshtein distance.
    EditDistance,
}

/// A string similarity scorer producing values in `[0, 100]`.
pub trait SimilarityScorer: std::fmt::Debug + Send + Sync {
    /// Case-insensitive similarity between two strings. Identical strings
    /// score 100; an empty side scores 0.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Similarity between two artist lists: the best pairwise score.
    fn artist_list_similarity(&self, first: &[String], second: &[String]) -> f64 {
        if first.is_empty() || second.is_empty() {
            return 0.0;
        }
        let mut best = 0.0_f64;
        for a in first {
            for b in second {
                let score = self.similarity(a, b);
                if score > best {
                    best = score;
                }
            }
        }
        best
    }
}

/// Construct the scorer for a strategy.
#[must_use]
pub fn scorer(strategy: SimilarityStrategy) -> Box<dyn SimilarityScorer> {
    match strategy {
        SimilarityStrategy::TokenSet => Box::new(TokenSetScorer),
        SimilarityStrategy::EditDistance => Box::new(EditDistanceScorer),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Token-set similarity: sort the shared and distinct token sets, join
/// them, and take the best edit-distance ratio among the three pairings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetScorer;

impl SimilarityScorer for TokenSetScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return 100.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
        let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

        let shared = join(tokens_a.intersection(&tokens_b));
        let only_a = join(tokens_a.difference(&tokens_b));
        let only_b = join(tokens_b.difference(&tokens_a));

        let combined_a = concat(&shared, &only_a);
        let combined_b = concat(&shared, &only_b);

        ratio(&shared, &combined_a)
            .max(ratio(&shared, &combined_b))
            .max(ratio(&combined_a, &combined_b))
    }
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

/// Pure normalized Levenshtein similarity:
/// `(1 - distance / max_len) * 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceScorer;

impl SimilarityScorer for EditDistanceScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return 100.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let distance = strsim::levenshtein(&a, &b) as f64;
        let max_len = a.chars().count().max(b.chars().count()) as f64;
        (1.0 - distance / max_len) * 100.0
    }

    /// Fraction of the first list with a close (≥ 80) counterpart in the
    /// second, scaled to `[0, 100]`.
    fn artist_list_similarity(&self, first: &[String], second: &[String]) -> f64 {
        if first.is_empty() || second.is_empty() {
            return 0.0;
        }
        let denominator = first.len().max(second.len()) as f64;
        let matched = first
            .iter()
            .filter(|a| second.iter().any(|b| self.similarity(a, b) >= 80.0))
            .count() as f64;
        matched / denominator * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        for s in [scorer(SimilarityStrategy::TokenSet), scorer(SimilarityStrategy::EditDistance)] {
            assert!((s.similarity("Eye to Eye", "Eye to Eye") - 100.0).abs() < f64::EPSILON);
            assert!((s.similarity("eye TO eye", "Eye to Eye") - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_empty_sides_score_0() {
        for s in [scorer(SimilarityStrategy::TokenSet), scorer(SimilarityStrategy::EditDistance)] {
            assert!(s.similarity("", "Eye to Eye").abs() < f64::EPSILON);
            assert!(s.similarity("Eye to Eye", "").abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("Eye to Eye", "Eye 2 Eye"),
            ("Gold Chain", "Gold Chains"),
            ("When Morning Comes", "Morning Comes"),
        ];
        for s in [scorer(SimilarityStrategy::TokenSet), scorer(SimilarityStrategy::EditDistance)] {
            for (a, b) in pairs {
                assert!((s.similarity(a, b) - s.similarity(b, a)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_token_set_ignores_word_order() {
        let s = TokenSetScorer;
        assert!((s.similarity("eye to eye", "to eye eye") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_token_set_subset_scores_high() {
        // A title that is a strict token subset of the other should score
        // high: the shared set equals one of the combined strings.
        let s = TokenSetScorer;
        assert!((s.similarity("morning comes", "when morning comes") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edit_distance_close_strings() {
        let s = EditDistanceScorer;
        let score = s.similarity("gold chain", "gold chains");
        assert!(score > 85.0 && score < 100.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        for s in [scorer(SimilarityStrategy::TokenSet), scorer(SimilarityStrategy::EditDistance)] {
            for (a, b) in [("abc", "xyz"), ("a", "completely different"), ("x", "x y z")] {
                let score = s.similarity(a, b);
                assert!((0.0..=100.0).contains(&score), "out of range: {score}");
            }
        }
    }

    #[test]
    fn test_artist_list_best_pairwise() {
        let s = TokenSetScorer;
        let first = vec!["J. Cole".to_string()];
        let second = vec!["Lute".to_string(), "J Cole".to_string()];
        assert!(s.artist_list_similarity(&first, &second) > 60.0);
        assert!(s.artist_list_similarity(&[], &second).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edit_distance_artist_list_fraction() {
        let s = EditDistanceScorer;
        let first = vec!["Lute".to_string(), "Cozz".to_string()];
        let second = vec!["Lute".to_string(), "Somebody".to_string()];
        // One of two artists has a close counterpart.
        assert!((s.artist_list_similarity(&first, &second) - 50.0).abs() < f64::EPSILON);
    }
}
