//! Keyword-presence document classification.
//!
//! A category scores one point per distinct keyword found anywhere in the
//! lowercased text, however often it repeats.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declaration order doubles as the tie-break order.
pub const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    ("invoice", &["invoice", "bill", "payment", "amount", "total", "due", "tax"]),
    ("contract", &["agreement", "contract", "party", "clause", "term", "obligation"]),
    ("id", &["identification", "passport", "license", "card", "number", "issued"]),
    ("notes", &["note", "memo", "reminder", "meeting", "action", "todo"]),
    ("receipt", &["receipt", "purchased", "transaction", "paid", "store"]),
];

/// Label used when no category matches.
pub const OTHER_LABEL: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub document_type: String,
    pub confidence: f64,
    /// Up to three best categories, best first.
    pub candidates: Vec<Candidate>,
    /// Raw keyword-presence counts for every category.
    pub features: BTreeMap<String, usize>,
}

impl ClassificationResult {
    /// The "nothing matched" result.
    pub fn other() -> Self {
        Self {
            document_type: OTHER_LABEL.to_string(),
            confidence: 0.0,
            candidates: Vec::new(),
            features: BTreeMap::new(),
        }
    }
}

/// Classifies text against a fixed keyword taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct DocumentClassifier {
    taxonomy: &'static [(&'static str, &'static [&'static str])],
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TAXONOMY)
    }
}

impl DocumentClassifier {
    pub fn new(taxonomy: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { taxonomy }
    }

    /// Distinct-keyword score per category, in taxonomy order.
    pub fn scores(&self, text: &str) -> Vec<(&'static str, usize)> {
        let text_lower = text.to_lowercase();
        self.taxonomy
            .iter()
            .map(|&(category, keywords)| {
                let score = keywords.iter().filter(|kw| text_lower.contains(**kw)).count();
                (category, score)
            })
            .collect()
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let scores = self.scores(text);
        let total: usize = scores.iter().map(|(_, s)| s).sum();
        if total == 0 {
            return ClassificationResult::other();
        }

        let features = scores
            .iter()
            .map(|&(category, score)| (category.to_string(), score))
            .collect();

        // Stable: ties keep taxonomy order.
        let mut ranked = scores;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let total = total as f64;
        let candidates: Vec<Candidate> = ranked
            .iter()
            .take(3)
            .map(|&(category, score)| Candidate {
                doc_type: capitalize(category),
                confidence: score as f64 / total,
            })
            .collect();

        let (top, top_score) = ranked[0];
        tracing::debug!(document_type = top, score = top_score, "classified document");

        ClassificationResult {
            document_type: capitalize(top),
            confidence: top_score as f64 / total,
            candidates,
            features,
        }
    }
}

/// Classify with the built-in taxonomy.
pub fn classify_document(text: &str) -> ClassificationResult {
    DocumentClassifier::default().classify(text)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_only() {
        let result = classify_document("INVOICE: payment of the total amount plus tax.");
        assert_eq!(result.document_type, "Invoice");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.candidates[0].doc_type, "Invoice");
        assert_eq!(result.candidates[0].confidence, result.confidence);
        assert_eq!(result.features["invoice"], 5);
        assert_eq!(result.features["contract"], 0);
        assert_eq!(result.features.len(), 5);
    }

    #[test]
    fn test_presence_not_frequency() {
        let classifier = DocumentClassifier::default();
        let scores = classifier.scores("memo memo memo memo memo");
        assert_eq!(scores[3], ("notes", 1));
    }

    #[test]
    fn test_nothing_matches() {
        let result = classify_document("lorem ipsum dolor sit amet");
        assert_eq!(result, ClassificationResult::other());
        assert_eq!(result.document_type, "Other");
        assert!(result.candidates.is_empty());
        assert!(result.features.is_empty());
    }

    #[test]
    fn test_ties_follow_taxonomy_order() {
        // One keyword each for receipt ("receipt") and contract ("clause").
        let result = classify_document("receipt clause");
        assert_eq!(result.document_type, "Contract");
        assert_eq!(result.candidates.len(), 3);
        assert_eq!(result.candidates[1].doc_type, "Receipt");
        assert_eq!(result.candidates[2].doc_type, "Invoice");
        assert_eq!(result.candidates[2].confidence, 0.0);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_candidate_confidences_sum_at_most_one() {
        let result = classify_document(
            "Meeting note: the contract payment is due; bring your passport and receipt.",
        );
        let sum: f64 = result.candidates.iter().map(|c| c.confidence).sum();
        assert!(sum <= 1.0 + 1e-9);
        assert!(result.candidates.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("id"), "Id");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_candidate_serializes_type_field() {
        let c = Candidate {
            doc_type: "Invoice".into(),
            confidence: 1.0,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "Invoice");
    }
}
