//! Paragraph-level search with synonym expansion.
//!
//! Text is split into paragraphs on blank lines. Each search term (the
//! query plus, optionally, its synonyms) contributes at most one match per
//! paragraph: its first case-insensitive occurrence. Repeat occurrences of
//! the same term in a paragraph are not reported.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::synonyms::SynonymTable;
use crate::types::*;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Smart search over a shared synonym table.
#[derive(Debug, Clone)]
pub struct SmartSearchEngine {
    synonyms: Arc<SynonymTable>,
    max_synonyms: usize,
}

impl SmartSearchEngine {
    pub fn new(synonyms: Arc<SynonymTable>, max_synonyms: usize) -> Self {
        Self {
            synonyms,
            max_synonyms,
        }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Up to the engine's synonym limit.
    pub fn get_synonyms(&self, term: &str) -> Vec<String> {
        self.synonyms.get_synonyms(term, self.max_synonyms)
    }

    pub fn search(&self, text: &str, query: &str, options: SearchOptions) -> SearchResult {
        self.search_with_limit(text, query, options, self.max_synonyms)
    }

    /// Synonym list for `query` plus the synonym-expanded search.
    pub fn synonym_search(&self, text: &str, query: &str, max_synonyms: usize) -> SynonymSearchResult {
        let options = SearchOptions {
            include_synonyms: true,
            highlight_paragraphs: false,
        };
        let result = self.search_with_limit(text, query, options, max_synonyms);
        SynonymSearchResult {
            original_query: query.to_string(),
            synonyms: result.synonyms_used,
            total_matches: result.total_matches,
            matches: result.matches,
        }
    }

    fn search_with_limit(
        &self,
        text: &str,
        query: &str,
        options: SearchOptions,
        max_synonyms: usize,
    ) -> SearchResult {
        if query.trim().is_empty() {
            return SearchResult::empty(query);
        }

        let query_lower = query.to_lowercase();
        let synonyms_used = if options.include_synonyms {
            self.synonyms.get_synonyms(query, max_synonyms)
        } else {
            Vec::new()
        };

        let mut terms: Vec<(String, MatchType)> = vec![(query_lower.clone(), MatchType::Exact)];
        for synonym in &synonyms_used {
            let term = synonym.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            if !terms.iter().any(|(t, _)| *t == term) {
                terms.push((term, MatchType::Synonym));
            }
        }

        let matchers: Vec<(Regex, MatchType)> = terms
            .iter()
            .filter_map(|(term, kind)| match build_matcher(term) {
                Some(re) => Some((re, *kind)),
                None => {
                    warn!("Skipping unsearchable term {:?}", term);
                    None
                }
            })
            .collect();

        let mut matches = Vec::new();
        for (paragraph_index, paragraph) in text.split(PARAGRAPH_SEPARATOR).enumerate() {
            for (re, kind) in &matchers {
                let Some(m) = re.find(paragraph) else {
                    continue;
                };
                let start_index = paragraph[..m.start()].chars().count();
                let end_index = start_index + m.as_str().chars().count();
                let highlighted = options.highlight_paragraphs.then(|| {
                    format!(
                        "{}<mark>{}</mark>{}",
                        &paragraph[..m.start()],
                        m.as_str(),
                        &paragraph[m.end()..]
                    )
                });
                matches.push(SearchMatch {
                    paragraph_index,
                    paragraph: paragraph.to_string(),
                    matched_text: m.as_str().to_string(),
                    start_index,
                    end_index,
                    relevance_score: kind.relevance(),
                    match_type: *kind,
                    highlighted,
                });
            }
        }

        debug!(
            query = %query_lower,
            terms = matchers.len(),
            matches = matches.len(),
            "smart search"
        );

        SearchResult {
            query: query.to_string(),
            total_matches: matches.len(),
            matches,
            synonyms_used,
        }
    }
}

/// Literal, case-insensitive matcher for one term.
fn build_matcher(term: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}
