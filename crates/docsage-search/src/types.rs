//! Search types.

use serde::{Deserialize, Serialize};

/// Relevance of a match on the query itself.
pub const EXACT_RELEVANCE: f64 = 1.0;
/// Relevance of a match on a synonym of the query.
pub const SYNONYM_RELEVANCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Synonym,
}

impl MatchType {
    pub fn relevance(&self) -> f64 {
        match self {
            Self::Exact => EXACT_RELEVANCE,
            Self::Synonym => SYNONYM_RELEVANCE,
        }
    }
}

/// Search flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default = "default_true")]
    pub include_synonyms: bool,
    /// Presentation only: attach a marked-up copy of each matched paragraph.
    #[serde(default)]
    pub highlight_paragraphs: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_synonyms: true,
            highlight_paragraphs: false,
        }
    }
}

/// First occurrence of one search term in one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Index among the blank-line separated paragraphs.
    pub paragraph_index: usize,
    pub paragraph: String,
    /// The matched slice of the paragraph, in its original casing.
    pub matched_text: String,
    /// Character offset of the match within the paragraph.
    pub start_index: usize,
    /// Character offset one past the match.
    pub end_index: usize,
    pub relevance_score: f64,
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,
}

/// Result of a smart search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub matches: Vec<SearchMatch>,
    pub total_matches: usize,
    pub synonyms_used: Vec<String>,
}

impl SearchResult {
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            matches: Vec::new(),
            total_matches: 0,
            synonyms_used: Vec::new(),
        }
    }
}

/// Result of a synonym search: the synonym list plus synonym-expanded matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymSearchResult {
    pub original_query: String,
    pub synonyms: Vec<String>,
    pub matches: Vec<SearchMatch>,
    pub total_matches: usize,
}
