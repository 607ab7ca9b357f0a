// Language histogram for the aggregate statistics.
// Turns per-repository primary languages into percentage shares.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Share of repositories using a language as their primary one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    /// Percentage of repositories with a known language, two decimals.
    #[serde(rename = "amount")]
    pub percentage: f64,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert language counts into shares, largest first.
///
/// Percentages are relative to the repositories that have a known language.
/// Ties are ordered by language name.
pub fn language_shares(counts: &HashMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = counts
        .iter()
        .map(|(language, &count)| LanguageShare {
            language: language.clone(),
            percentage: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.language.cmp(&b.language))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs
            .iter()
            .map(|(language, count)| (language.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn test_shares_sorted_descending() {
        let shares = language_shares(&counts(&[("Lua", 1), ("TypeScript", 3), ("Rust", 2)]));

        let languages: Vec<&str> = shares.iter().map(|s| s.language.as_str()).collect();
        assert_eq!(languages, vec!["TypeScript", "Rust", "Lua"]);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].percentage, 33.33);
        assert_eq!(shares[2].percentage, 16.67);
        assert!(shares.windows(2).all(|w| w[0].percentage >= w[1].percentage));
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let shares = language_shares(&counts(&[("Go", 1), ("C", 1)]));
        assert_eq!(shares[0].language, "C");
        assert_eq!(shares[1].language, "Go");
        assert_eq!(shares[0].percentage, 50.0);
    }

    #[test]
    fn test_exact_shares_sum_to_one_hundred() {
        let shares = language_shares(&counts(&[("A", 2), ("B", 1), ("C", 4), ("D", 1)]));
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn test_six_way_tie_rounds_above_one_hundred() {
        let shares = language_shares(&counts(&[
            ("A", 1),
            ("B", 1),
            ("C", 1),
            ("D", 1),
            ("E", 1),
            ("F", 1),
        ]));

        assert!(shares.iter().all(|s| s.percentage == 16.67));
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        // Per-share rounding may overshoot by at most 0.005 per language.
        assert!(sum > 100.0);
        assert!(sum - 100.0 <= 0.005 * shares.len() as f64 + 1e-9);
    }

    #[test]
    fn test_no_languages() {
        assert!(language_shares(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_serializes_percentage_as_amount() {
        let share = LanguageShare {
            language: "Rust".to_string(),
            percentage: 75.5,
        };
        assert_eq!(
            serde_json::to_value(&share).unwrap(),
            serde_json::json!({ "language": "Rust", "amount": 75.5 })
        );
    }
}
