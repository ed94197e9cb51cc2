//! Color-coded highlight categories for sentences.
//!
//! Each sentence is tested independently against definition, date, and
//! amount triggers and lands in every category it triggers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::segment::segment_sentences;

const DEFINITION_TRIGGERS: &[&str] = &["is defined as", "means", "refers to", "is a", "are"];

static TERM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());
static DATE_TRIGGER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)")
        .unwrap()
});
static AMOUNT_TRIGGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$₹€£]\s?\d+|\d+\s?(?:USD|INR|EUR|GBP)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    /// Definitions.
    Blue,
    /// Dates.
    Green,
    /// Amounts.
    Yellow,
}

/// One highlighted sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightEntry {
    pub text: String,
    pub color: HighlightColor,
    /// First capitalized run of a definition sentence, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    pub definitions: Vec<HighlightEntry>,
    pub dates: Vec<HighlightEntry>,
    pub amounts: Vec<HighlightEntry>,
}

impl Highlights {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.dates.is_empty() && self.amounts.is_empty()
    }
}

/// Segment `text` and sort each sentence into highlight categories.
pub fn categorize_highlights(text: &str) -> Highlights {
    categorize_sentences(&segment_sentences(text))
}

/// Categorize already-segmented sentences.
pub fn categorize_sentences(sentences: &[&str]) -> Highlights {
    let mut highlights = Highlights::default();

    for &sentence in sentences {
        let lower = sentence.to_lowercase();

        if DEFINITION_TRIGGERS.iter().any(|t| lower.contains(t)) {
            highlights.definitions.push(HighlightEntry {
                text: sentence.to_string(),
                color: HighlightColor::Blue,
                term: TERM_RE.find(sentence).map(|m| m.as_str().to_string()),
            });
        }

        if DATE_TRIGGER_RE.is_match(sentence) {
            highlights.dates.push(HighlightEntry {
                text: sentence.to_string(),
                color: HighlightColor::Green,
                term: None,
            });
        }

        if AMOUNT_TRIGGER_RE.is_match(sentence) {
            highlights.amounts.push(HighlightEntry {
                text: sentence.to_string(),
                color: HighlightColor::Yellow,
                term: None,
            });
        }
    }

    highlights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_with_term() {
        let h = categorize_highlights("A Service Level Agreement is defined as a commitment.");
        assert_eq!(h.definitions.len(), 1);
        assert_eq!(h.definitions[0].color, HighlightColor::Blue);
        assert_eq!(h.definitions[0].term.as_deref(), Some("Service Level Agreement"));
    }

    #[test]
    fn test_definition_without_term_still_emitted() {
        let h = categorize_highlights("the fee means nothing here.");
        assert_eq!(h.definitions.len(), 1);
        assert_eq!(h.definitions[0].term, None);
    }

    #[test]
    fn test_sentence_in_several_categories() {
        let h = categorize_highlights("The deposit is a sum of $500 due on 01/02/2024.");
        assert_eq!(h.definitions.len(), 1);
        assert_eq!(h.dates.len(), 1);
        assert_eq!(h.amounts.len(), 1);
        assert_eq!(h.dates[0].color, HighlightColor::Green);
        assert_eq!(h.amounts[0].color, HighlightColor::Yellow);
    }

    #[test]
    fn test_month_abbreviation_and_currency_code() {
        let h = categorize_highlights("Paid 250 USD. Renewal in dec. Nothing else.");
        assert_eq!(h.amounts.len(), 1);
        assert_eq!(h.amounts[0].text, "Paid 250 USD.");
        assert_eq!(h.dates.len(), 1);
        assert_eq!(h.dates[0].text, "Renewal in dec.");
    }

    #[test]
    fn test_plain_text_has_no_highlights() {
        assert!(categorize_highlights("Nothing to see here. Move along.").is_empty());
        assert!(categorize_highlights("").is_empty());
    }

    #[test]
    fn test_term_omitted_from_json_when_absent() {
        let entry = HighlightEntry {
            text: "x".into(),
            color: HighlightColor::Green,
            term: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["color"], "green");
        assert!(json.get("term").is_none());
    }
}
