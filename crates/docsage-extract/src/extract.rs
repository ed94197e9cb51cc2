//! Rule-based document intelligence over plain text.
//!
//! Ranks important sentences, extracts structured entities, tags
//! color-coded highlights, classifies documents by keyword presence, and
//! pulls keyphrases. Every operation is a pure function of its input and
//! static tables; degenerate input yields empty results, never errors.

pub mod classify;
pub mod entities;
pub mod highlights;
pub mod keyphrases;
pub mod passages;
pub mod segment;

use docsage_core::{AnalysisConfig, LinguisticCapability};
use serde::{Deserialize, Serialize};

use classify::ClassificationResult;
use entities::EntityBundle;
use highlights::Highlights;
use keyphrases::{Keyphrase, KeyphraseBackend};
use passages::SentenceRecord;

/// Combined analysis result for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Non-blank paragraphs.
    pub paragraph_count: usize,
    /// Best-scoring sentences, best first.
    pub important_lines: Vec<SentenceRecord>,
    pub entities: EntityBundle,
    pub highlights: Highlights,
    pub classification: ClassificationResult,
    pub keyphrases: Vec<Keyphrase>,
    /// Which backend produced `keyphrases`.
    pub keyphrase_backend: LinguisticCapability,
}

impl DocumentAnalysis {
    /// Explicit empty result for blank input.
    pub fn empty(keyphrase_backend: LinguisticCapability) -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            paragraph_count: 0,
            important_lines: Vec::new(),
            entities: EntityBundle::default(),
            highlights: Highlights::default(),
            classification: ClassificationResult::other(),
            keyphrases: Vec::new(),
            keyphrase_backend,
        }
    }
}

/// Run all analyses on a text.
pub fn analyze_document(
    text: &str,
    config: &AnalysisConfig,
    keyphrase_backend: &dyn KeyphraseBackend,
) -> DocumentAnalysis {
    if text.trim().is_empty() {
        tracing::debug!("blank input, returning empty analysis");
        return DocumentAnalysis::empty(keyphrase_backend.capability());
    }

    let sentences = segment::segment_sentences(text);

    let analysis = DocumentAnalysis {
        word_count: segment::word_count(text),
        sentence_count: sentences.len(),
        paragraph_count: segment::split_paragraphs(text)
            .iter()
            .filter(|p| !p.trim().is_empty())
            .count(),
        important_lines: passages::rank_top(&sentences, config.top_lines),
        entities: entities::extract_entities(text),
        highlights: highlights::categorize_sentences(&sentences),
        classification: classify::classify_document(text),
        keyphrases: keyphrase_backend.extract(text, config.keyphrase_count),
        keyphrase_backend: keyphrase_backend.capability(),
    };

    tracing::debug!(
        sentences = analysis.sentence_count,
        entities = analysis.entities.total(),
        document_type = %analysis.classification.document_type,
        "analyzed document"
    );
    analysis
}
