//! Structured entity extraction: dates, amounts, definitions, emails,
//! phone numbers, and URLs.
//!
//! Each category runs its own regex battery over the raw text. Matches are
//! deduplicated per category and reported in order of first occurrence.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Entities found in a text, one list per category.
///
/// No list contains the same string twice; the same string may appear in
/// more than one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub definitions: Vec<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub urls: Vec<String>,
}

impl EntityBundle {
    /// Category name → matches, in a fixed order.
    pub fn categories(&self) -> [(&'static str, &[String]); 6] {
        [
            ("dates", self.dates.as_slice()),
            ("amounts", self.amounts.as_slice()),
            ("definitions", self.definitions.as_slice()),
            ("emails", self.emails.as_slice()),
            ("phone_numbers", self.phone_numbers.as_slice()),
            ("urls", self.urls.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, values)| values.is_empty())
    }

    pub fn total(&self) -> usize {
        self.categories().iter().map(|(_, values)| values.len()).sum()
    }
}

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        // DD/MM/YYYY or MM/DD/YYYY
        r"(?i)\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
        // YYYY-MM-DD
        r"(?i)\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b",
        // Month DD, YYYY
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}\b",
        // DD Month YYYY
        r"(?i)\b\d{1,2} (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4}\b",
    ])
});

static AMOUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\$\s?\d+(?:,\d{3})*(?:\.\d{2})?",
        r"₹\s?\d+(?:,\d{3})*(?:\.\d{2})?",
        r"€\s?\d+(?:,\d{3})*(?:\.\d{2})?",
        r"£\s?\d+(?:,\d{3})*(?:\.\d{2})?",
        r"(?i)\b\d+(?:,\d{3})*(?:\.\d{2})?\s?(?:USD|INR|EUR|GBP)\b",
    ])
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Optional `+CC` prefix, then `(AAA)` or a bare `AAA` area code.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap()
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*",
    )
    .unwrap()
});

/// "Term marker explanation." where Term is one or more capitalized words.
static DEFINITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+is\s+defined\s+as\s+([^.]+\.)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+means\s+([^.]+\.)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+refers\s+to\s+([^.]+\.)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*):\s+([^.]+\.)",
    ])
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Run every category battery over `text`.
pub fn extract_entities(text: &str) -> EntityBundle {
    let bundle = EntityBundle {
        dates: extract_with_patterns(text, &DATE_PATTERNS),
        amounts: extract_with_patterns(text, &AMOUNT_PATTERNS),
        definitions: extract_definitions(text),
        emails: extract_with_patterns(text, std::slice::from_ref(&*EMAIL_RE)),
        phone_numbers: extract_with_patterns(text, std::slice::from_ref(&*PHONE_RE)),
        urls: extract_with_patterns(text, std::slice::from_ref(&*URL_RE)),
    };
    tracing::debug!(total = bundle.total(), "extracted entities");
    bundle
}

fn extract_definitions(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();
    for re in DEFINITION_PATTERNS.iter() {
        for cap in re.captures_iter(text) {
            if let (Some(whole), Some(term), Some(explanation)) = (cap.get(0), cap.get(1), cap.get(2)) {
                found.push((
                    whole.start(),
                    format!("{}: {}", term.as_str(), explanation.as_str()),
                ));
            }
        }
    }
    dedup_in_text_order(found)
}

/// Helper: extract matches from multiple regex patterns, deduplicated.
fn extract_with_patterns(text: &str, patterns: &[Regex]) -> Vec<String> {
    let found = patterns
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| (m.start(), m.as_str().to_string()))
        .collect();
    dedup_in_text_order(found)
}

/// Order by offset (stable across patterns), keep the first copy of each string.
fn dedup_in_text_order(mut found: Vec<(usize, String)>) -> Vec<String> {
    found.sort_by_key(|(start, _)| *start);
    let mut seen: HashSet<String> = HashSet::new();
    found
        .into_iter()
        .filter_map(|(_, s)| if seen.insert(s.clone()) { Some(s) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_phone_scenario() {
        let text = "Please write to jane@example.com for details. Call 555-123-4567 today.";
        let bundle = extract_entities(text);
        assert_eq!(bundle.emails, vec!["jane@example.com"]);
        assert_eq!(bundle.phone_numbers, vec!["555-123-4567"]);
        assert!(bundle.dates.is_empty());
        assert!(bundle.amounts.is_empty());
        assert!(bundle.definitions.is_empty());
        assert!(bundle.urls.is_empty());
    }

    #[test]
    fn test_phone_with_country_code() {
        let bundle = extract_entities("Office: +1 555 123 4567 during business hours.");
        assert_eq!(bundle.phone_numbers, vec!["+1 555 123 4567"]);
    }

    #[test]
    fn test_phone_with_parenthesized_area_code() {
        let bundle = extract_entities("Reach the desk at (555) 123-4567 or 555.987.6543.");
        assert_eq!(bundle.phone_numbers, vec!["(555) 123-4567", "555.987.6543"]);
    }

    #[test]
    fn test_dates_all_forms() {
        let text = "Signed 12/05/2023, filed 2023-06-01, due March 3, 2024 and renewed 15 January 2025.";
        let bundle = extract_entities(text);
        assert_eq!(
            bundle.dates,
            vec!["12/05/2023", "2023-06-01", "March 3, 2024", "15 January 2025"]
        );
    }

    #[test]
    fn test_amounts() {
        let text = "Fees: $1,234.56 plus ₹500 and €20.00, or 99.99 usd in total. £7 tip.";
        let bundle = extract_entities(text);
        assert_eq!(bundle.amounts, vec!["$1,234.56", "₹500", "€20.00", "99.99 usd", "£7"]);
    }

    #[test]
    fn test_urls() {
        let text = "See https://www.example.com/docs?page=2 and http://test.org today.";
        let bundle = extract_entities(text);
        assert_eq!(
            bundle.urls,
            vec!["https://www.example.com/docs?page=2", "http://test.org"]
        );
    }

    #[test]
    fn test_definitions() {
        let text = "Force Majeure means an event beyond control. Term refers to the period of service.";
        let bundle = extract_entities(text);
        assert_eq!(
            bundle.definitions,
            vec![
                "Force Majeure: an event beyond control.",
                "Term: the period of service.",
            ]
        );
    }

    #[test]
    fn test_duplicates_removed_in_first_occurrence_order() {
        let text = "Pay $10 now, $20 later, and $10 again. Mail a@b.io or a@b.io.";
        let bundle = extract_entities(text);
        assert_eq!(bundle.amounts, vec!["$10", "$20"]);
        assert_eq!(bundle.emails, vec!["a@b.io"]);
    }

    #[test]
    fn test_no_entities() {
        let bundle = extract_entities("nothing to see here");
        assert!(bundle.is_empty());
        assert_eq!(bundle.total(), 0);
    }
}
