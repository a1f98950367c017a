//! Weighted fuzzy matching over the emoji dictionary
//!
//! Ranking uses a deviation score where lower is better and `f64::INFINITY`
//! means no match:
//! - an exact match scores 0
//! - a prefix match scores `PARTIAL_DEVIATION_MIN * target_len`, so every
//!   prefix match beats every non-prefix match and shorter targets win
//! - an ordered fuzzy match scores `(1 - term_len/target_len) + gap_chars`:
//!   the fractional part rewards substring density, the integer part counts
//!   characters skipped while walking the target for the next needed char
//!
//! Scores within `search` are sorted ascending with a stable sort, so ties
//! keep the dictionary's original table order.

use std::cmp::Ordering;
use std::time::Instant;

use tracing::debug;

use crate::dictionary::{Dictionary, EmojiEntry};

/// Non-zero epsilon keeping prefix matches ordered by target length while
/// staying below every non-prefix score.
pub const PARTIAL_DEVIATION_MIN: f64 = 0.000_001;

/// Find the first occurrence of `needle` as a contiguous run in `haystack`,
/// by Unicode scalar position. An empty needle matches at 0.
fn find_contiguous(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Score `term` against `target`; lower is better, `INFINITY` is no match.
pub fn deviation_score(term: &str, target: &str) -> f64 {
    if term == target {
        return 0.0;
    }

    let term: Vec<char> = term.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // The subsequence walk starts at the contiguous occurrence if there is
    // one, otherwise at the first occurrence of the term's first character.
    let scan_start = match find_contiguous(&target, &term) {
        Some(0) => return PARTIAL_DEVIATION_MIN * target.len() as f64,
        Some(i) => Some(i),
        None => term.first().and_then(|&c| target.iter().position(|&t| t == c)),
    };

    let Some(scan_start) = scan_start else {
        return f64::INFINITY;
    };

    let mut term_idx = 0;
    let mut char_spaces = 0u32;
    for &ch in &target[scan_start..] {
        if term_idx >= term.len() {
            break;
        }
        if ch == term[term_idx] {
            term_idx += 1;
        } else {
            char_spaces += 1;
        }
    }

    if term_idx < term.len() {
        // Not even an ordered subsequence from the scan start
        return f64::INFINITY;
    }

    (1.0 - term.len() as f64 / target.len() as f64) + char_spaces as f64
}

/// Fuzzy searcher over a fixed dictionary with a result cap.
#[derive(Debug, Clone)]
pub struct FuzzySearcher {
    dictionary: Dictionary,
    num_results: usize,
}

impl FuzzySearcher {
    pub fn new(dictionary: Dictionary, num_results: usize) -> Self {
        FuzzySearcher {
            dictionary,
            num_results,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Rank every dictionary entry against `term` and return the best
    /// matches, ascending by deviation score, capped at `num_results`.
    pub fn search(&self, term: &str) -> Vec<&EmojiEntry> {
        let started = Instant::now();

        let mut matches: Vec<(f64, &EmojiEntry)> = self
            .dictionary
            .entries()
            .iter()
            .filter_map(|entry| {
                let score = deviation_score(term, &entry.name);
                score.is_finite().then_some((score, entry))
            })
            .collect();

        // Stable sort: equal scores keep dictionary order
        matches.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        matches.truncate(self.num_results);

        debug!(
            term = term,
            results = matches.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Fuzzy search completed"
        );

        matches.into_iter().map(|(_, entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        Dictionary::from_entries(
            pairs
                .iter()
                .map(|(name, glyph)| EmojiEntry {
                    name: name.to_string(),
                    glyph: glyph.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_scores_zero() {
        for name in ["apple", "grinning_face", "a", "thumbs_up"] {
            assert_eq!(deviation_score(name, name), 0.0, "for {}", name);
        }
    }

    #[test]
    fn test_prefix_match_scales_with_target_length() {
        let short = deviation_score("ap", "app");
        let long = deviation_score("ap", "apple");

        assert_eq!(short, PARTIAL_DEVIATION_MIN * 3.0);
        assert_eq!(long, PARTIAL_DEVIATION_MIN * 5.0);
        assert!(short < long, "shorter target must win among prefix matches");
    }

    #[test]
    fn test_prefix_beats_any_non_prefix_subsequence() {
        // "pe" is a prefix of "pear" but only a scattered subsequence of "apple"
        let prefix = deviation_score("pe", "pear");
        let scattered = deviation_score("pe", "apple");

        assert!(prefix < scattered);
        assert!(scattered.is_finite());
    }

    #[test]
    fn test_interior_substring_scores_below_one_gap() {
        // "pp" occurs contiguously inside "apple": no gap chars are counted,
        // score is just the density fraction
        let score = deviation_score("pp", "apple");
        assert_eq!(score, 1.0 - 2.0 / 5.0);
    }

    #[test]
    fn test_subsequence_counts_gap_characters() {
        // scan starts at 'a' (index 0 of "almond"); consuming "ad" skips
        // "lmon" -> 4 gap chars
        let score = deviation_score("ad", "almond");
        assert_eq!(score, (1.0 - 2.0 / 6.0) + 4.0);
    }

    #[test]
    fn test_unmatched_first_char_is_infinite() {
        assert!(deviation_score("z", "apple").is_infinite());
        assert!(deviation_score("zebra", "apple").is_infinite());
    }

    #[test]
    fn test_broken_subsequence_is_infinite() {
        // 'p' exists in "spin" but "pq" cannot be consumed in order
        assert!(deviation_score("pq", "spin").is_infinite());
    }

    #[test]
    fn test_empty_term_matches_everything_by_length() {
        let searcher = FuzzySearcher::new(
            dict(&[("banana", "🍌"), ("fig", "🫐"), ("plum", "🍑")]),
            5,
        );
        let results = searcher.search("");
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();

        // Every entry is a prefix match; shorter names first
        assert_eq!(names, vec!["fig", "plum", "banana"]);
    }

    #[test]
    fn test_search_caps_results() {
        let searcher = FuzzySearcher::new(
            dict(&[
                ("aa", "1"),
                ("ab", "2"),
                ("ac", "3"),
                ("ad", "4"),
                ("ae", "5"),
                ("af", "6"),
                ("ag", "7"),
            ]),
            5,
        );
        assert_eq!(searcher.search("a").len(), 5);
    }

    #[test]
    fn test_search_sorted_ascending_by_score() {
        let searcher = FuzzySearcher::new(
            dict(&[("pineapple", "🍍"), ("apple", "🍎"), ("app", "📱")]),
            5,
        );
        let results = searcher.search("ap");
        let scores: Vec<f64> = results
            .iter()
            .map(|e| deviation_score("ap", &e.name))
            .collect();

        for pair in scores.windows(2) {
            assert!(pair[0] <= pair[1], "scores not ascending: {:?}", scores);
        }
    }

    #[test]
    fn test_ties_keep_dictionary_order() {
        // Identical lengths and identical prefix scores: table order decides
        let searcher = FuzzySearcher::new(
            dict(&[("cart", "1"), ("carp", "2"), ("card", "3")]),
            5,
        );
        let names: Vec<&str> = searcher
            .search("car")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["cart", "carp", "card"]);
    }

    #[test]
    fn test_app_before_apple_for_ap() {
        let searcher = FuzzySearcher::new(dict(&[("apple", "🍎"), ("app", "📱")]), 5);
        let names: Vec<&str> = searcher
            .search("ap")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["app", "apple"]);
    }

    #[test]
    fn test_unmatchable_term_returns_empty() {
        let searcher = FuzzySearcher::new(dict(&[("apple", "🍎"), ("pear", "🍐")]), 5);
        assert!(searcher.search("zzz").is_empty());
    }
}
