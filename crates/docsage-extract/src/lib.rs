//! DocSage Extract: sentence ranking, entities, highlights, classification, keyphrases.

pub mod extract;

pub use extract::classify::{
    classify_document, Candidate, ClassificationResult, DocumentClassifier,
};
pub use extract::entities::{extract_entities, EntityBundle};
pub use extract::highlights::{
    categorize_highlights, HighlightColor, HighlightEntry, Highlights,
};
pub use extract::keyphrases::{
    extract_topics, select_keyphrase_backend, ChunkedKeyphrases, FrequencyKeyphrases,
    Keyphrase, KeyphraseBackend, NounChunker, Topic,
};
pub use extract::passages::{detect_important_lines, rank_top, score_sentences, SentenceRecord};
pub use extract::segment::{segment_sentences, split_paragraphs, word_count};
pub use extract::{analyze_document, DocumentAnalysis};
