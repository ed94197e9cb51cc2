//! Important-line detection.
//!
//! Scores sentences by position, length, salience keywords, digits,
//! capitalized words, and discourse-marker openings, then keeps the best.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::segment::{segment_sentences, word_count};

/// Salience keywords. One match is enough; extra matches add nothing.
const SALIENCE_KEYWORDS: &[&str] = &[
    "important",
    "critical",
    "key",
    "significant",
    "essential",
    "conclusion",
    "summary",
    "result",
    "finding",
    "objective",
    "purpose",
    "goal",
    "recommendation",
    "note",
    "warning",
];

/// Discourse markers checked against the lowercased sentence start.
const DISCOURSE_MARKERS: &[&str] = &["this", "we", "the study", "research", "analysis", "results"];

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static CAPITALIZED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());

/// A scored sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub text: String,
    /// Index of the sentence in the input sequence.
    pub position: usize,
    pub word_count: usize,
    pub score: u32,
}

/// Score every sentence, keeping input order.
pub fn score_sentences(sentences: &[&str]) -> Vec<SentenceRecord> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(position, &sentence)| {
            let words = word_count(sentence);
            SentenceRecord {
                text: sentence.to_string(),
                position,
                word_count: words,
                score: score_sentence(sentence, position, total, words),
            }
        })
        .collect()
}

fn score_sentence(sentence: &str, position: usize, total: usize, words: usize) -> u32 {
    let mut score = 0;
    let lower = sentence.to_lowercase();

    // Opening and closing sentences
    if position < 3 {
        score += 3;
    }
    if position + 3 >= total {
        score += 2;
    }

    if (10..=30).contains(&words) {
        score += 2;
    }

    if SALIENCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        score += 3;
    }

    if DIGITS_RE.is_match(sentence) {
        score += 1;
    }

    if CAPITALIZED_RE.find_iter(sentence).nth(1).is_some() {
        score += 1;
    }

    if DISCOURSE_MARKERS.iter().any(|m| lower.starts_with(m)) {
        score += 1;
    }

    score
}

/// Score and keep the `top_n` best sentences.
///
/// Sorting is stable: equal scores stay in their original order.
pub fn rank_top(sentences: &[&str], top_n: usize) -> Vec<SentenceRecord> {
    let mut records = score_sentences(sentences);
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(top_n);
    records
}

/// Segment `text` and rank its sentences.
pub fn detect_important_lines(text: &str, top_n: usize) -> Vec<SentenceRecord> {
    rank_top(&segment_sentences(text), top_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_ranking() {
        let text = "Hello. This is important. The result shows 42% growth in 2024.";
        let ranked = detect_important_lines(text, 10);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[1].position, 2);
        assert_eq!(ranked[2].position, 0);
        assert!(ranked[1].score > ranked[2].score);
    }

    #[test]
    fn test_individual_bonuses() {
        // Position 5 of 20: neither opening nor closing.
        let filler: Vec<String> = (0..20).map(|i| format!("line {}", i)).collect();
        let mut sentences: Vec<&str> = filler.iter().map(|s| s.as_str()).collect();
        sentences[5] = "we note that Alice met Bob";
        let records = score_sentences(&sentences);
        // keyword (+3), two capitalized words (+1), marker "we" (+1)
        assert_eq!(records[5].score, 5);
        // "line N" has a digit only, and sits in the last three for N >= 17
        assert_eq!(records[10].score, 1);
        assert_eq!(records[19].score, 3);
        assert_eq!(records[0].score, 4);
    }

    #[test]
    fn test_keyword_awarded_once() {
        let sentences = ["x", "x", "x", "important critical key summary", "x", "x", "x"];
        let records = score_sentences(&sentences);
        assert_eq!(records[3].score, 3);
    }

    #[test]
    fn test_length_bonus_bounds() {
        let nine = "a b c d e f g h i";
        let ten = "a b c d e f g h i j";
        let records = score_sentences(&["x", "x", "x", nine, ten, "x", "x", "x"]);
        assert_eq!(records[3].score, 0);
        assert_eq!(records[4].score, 2);
    }

    #[test]
    fn test_rank_top_truncates_and_is_stable() {
        let sentences = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"];
        let ranked = rank_top(&sentences, 4);
        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_top(&[], 10).is_empty());
        assert!(detect_important_lines("", 10).is_empty());
    }
}
