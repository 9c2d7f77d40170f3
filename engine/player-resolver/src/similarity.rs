//! String-similarity capability.
//!
//! The resolver is written against [`NameSimilarity`] so the concrete
//! algorithm is swappable; any edit-distance ratio on a 0–100 scale
//! satisfies the contract.

use strsim::normalized_levenshtein;

/// A similarity score between two names, 0 (unrelated) to 100 (equal).
pub trait NameSimilarity {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Token-sort Levenshtein ratio.
///
/// Lowercases, splits to alphanumeric tokens, sorts, rejoins, then takes the
/// normalized Levenshtein ratio — so "Panarin Artemi" and "Artemi Panarin"
/// score 100, and punctuation or diacritic-stripping noise stays cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl NameSimilarity for TokenSortRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a = token_sort_key(a);
        let b = token_sort_key(b);
        (normalized_levenshtein(&a, &b) * 100.0).round() as u8
    }
}

fn token_sort_key(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_names_score_100() {
        assert_eq!(TokenSortRatio.score("Artemi Panarin", "Artemi Panarin"), 100);
    }

    #[test]
    fn test_token_order_is_ignored() {
        assert_eq!(TokenSortRatio.score("Panarin Artemi", "Artemi Panarin"), 100);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(TokenSortRatio.score("k'andre miller", "K'Andre Miller"), 100);
    }

    #[test]
    fn test_near_miss_scores_high() {
        // Diacritic-stripped vs. plain spelling.
        assert!(TokenSortRatio.score("Stutzle Tim", "Tim Stützle") >= 80);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        assert!(TokenSortRatio.score("Artemi Panarin", "Connor McDavid") < 50);
    }
}
