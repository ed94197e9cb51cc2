//! DocSage Search: synonym expansion, paragraph smart search, pairwise similarity.
//!
//! `SmartSearchEngine` is the only component that depends on another one:
//! it expands queries through a shared `SynonymTable`.

pub mod similarity;
pub mod smart;
pub mod synonyms;
pub mod types;

pub use similarity::{semantic_similarity, similarity, tfidf_pair, SimilarityOutcome};
pub use smart::SmartSearchEngine;
pub use synonyms::{SynonymTable, BUILTIN_LEXICON};
pub use types::*;

use std::sync::Arc;

/// Synonym lookup against the built-in lexicon.
pub fn get_synonyms(term: &str, max_synonyms: usize) -> Vec<String> {
    SynonymTable::builtin().get_synonyms(term, max_synonyms)
}

/// One-off smart search against the built-in lexicon (up to five synonyms).
pub fn smart_search(text: &str, query: &str, include_synonyms: bool) -> SearchResult {
    let engine = SmartSearchEngine::new(
        Arc::new(SynonymTable::builtin()),
        docsage_core::config::DEFAULT_MAX_SYNONYMS,
    );
    engine.search(
        text,
        query,
        SearchOptions {
            include_synonyms,
            highlight_paragraphs: false,
        },
    )
}
