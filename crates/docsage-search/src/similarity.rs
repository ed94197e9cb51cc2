//! Pairwise TF-IDF cosine similarity.
//!
//! The two input texts are the whole corpus, so IDF only reflects these two
//! documents and scores are comparable only within a single call.
//! Weighting follows the common smoothed scheme:
//! `idf = ln((1 + n) / (1 + df)) + 1`, raw term counts, lowercase tokens of
//! two or more word characters.

use std::collections::{BTreeMap, BTreeSet};

use ndarray::Array1;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

const NORM_EPSILON: f64 = 1e-12;

/// Outcome of a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "score", rename_all = "lowercase")]
pub enum SimilarityOutcome {
    Score(f64),
    /// No usable vocabulary (empty text, or one side has no tokens).
    Degenerate,
}

impl SimilarityOutcome {
    pub fn score(&self) -> f64 {
        match self {
            Self::Score(s) => *s,
            Self::Degenerate => 0.0,
        }
    }
}

fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let lower = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for m in TOKEN_RE.find_iter(&lower) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF vectors for the pair over their shared, sorted vocabulary.
///
/// Returns `None` when neither text has any token.
pub fn tfidf_pair(text1: &str, text2: &str) -> Option<(Array1<f64>, Array1<f64>)> {
    let docs = [term_counts(text1), term_counts(text2)];
    let vocabulary: BTreeSet<&str> = docs
        .iter()
        .flat_map(|d| d.keys().map(|k| k.as_str()))
        .collect();
    if vocabulary.is_empty() {
        return None;
    }

    let n_docs = docs.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains_key(*term)).count() as f64;
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let vectorize = |doc: &BTreeMap<String, usize>| -> Array1<f64> {
        vocabulary
            .iter()
            .zip(&idf)
            .map(|(term, w)| doc.get(*term).copied().unwrap_or(0) as f64 * w)
            .collect()
    };

    Some((vectorize(&docs[0]), vectorize(&docs[1])))
}

/// Cosine similarity of the pair's TF-IDF vectors.
pub fn similarity(text1: &str, text2: &str) -> SimilarityOutcome {
    let Some((a, b)) = tfidf_pair(text1, text2) else {
        return SimilarityOutcome::Degenerate;
    };

    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();
    if norm_a < NORM_EPSILON || norm_b < NORM_EPSILON {
        return SimilarityOutcome::Degenerate;
    }

    let cosine = a.dot(&b) / (norm_a * norm_b);
    SimilarityOutcome::Score(cosine.clamp(0.0, 1.0))
}

/// Similarity score in [0, 1]; degenerate input scores 0.0.
pub fn semantic_similarity(text1: &str, text2: &str) -> f64 {
    similarity(text1, text2).score()
}
