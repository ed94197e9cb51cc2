//! Keyphrase and topic extraction.
//!
//! The `KeyphraseBackend` trait abstracts over phrase extraction.
//! Implementations:
//! - `ChunkedKeyphrases`: counts noun-phrase chunks from a `NounChunker`
//!   (a language model supplied by the caller)
//! - `FrequencyKeyphrases`: word-frequency fallback, always available

use std::collections::HashMap;
use std::sync::Arc;

use docsage_core::LinguisticCapability;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LOWER_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    pub phrase: String,
    /// frequency / number of counted phrases.
    pub score: f64,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub weight: f64,
    pub keywords: Vec<String>,
}

/// Splits text into noun-phrase chunks. Provided by a linguistic model.
pub trait NounChunker: Send + Sync {
    fn noun_chunks(&self, text: &str) -> Vec<String>;
}

/// Trait for keyphrase backends.
pub trait KeyphraseBackend: Send + Sync {
    /// Return up to `top_n` phrases, most frequent first.
    fn extract(&self, text: &str, top_n: usize) -> Vec<Keyphrase>;

    fn capability(&self) -> LinguisticCapability;
}

/// Most-common word counting over lowercase tokens of at least `min_len` letters.
pub struct FrequencyKeyphrases {
    min_len: usize,
}

impl FrequencyKeyphrases {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

impl Default for FrequencyKeyphrases {
    fn default() -> Self {
        Self::new(docsage_core::config::DEFAULT_MIN_KEYPHRASE_LEN)
    }
}

impl KeyphraseBackend for FrequencyKeyphrases {
    fn extract(&self, text: &str, top_n: usize) -> Vec<Keyphrase> {
        let lower = text.to_lowercase();
        let words = LOWER_WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|w| w.len() >= self.min_len);
        most_common(words, top_n)
    }

    fn capability(&self) -> LinguisticCapability {
        LinguisticCapability::Frequency
    }
}

/// Noun-chunk counting backed by a linguistic model.
pub struct ChunkedKeyphrases<C: ?Sized> {
    chunker: Arc<C>,
}

impl<C: NounChunker + ?Sized> ChunkedKeyphrases<C> {
    pub fn new(chunker: Arc<C>) -> Self {
        Self { chunker }
    }
}

impl<C: NounChunker + ?Sized> KeyphraseBackend for ChunkedKeyphrases<C> {
    fn extract(&self, text: &str, top_n: usize) -> Vec<Keyphrase> {
        let chunks = self.chunker.noun_chunks(text);
        most_common(chunks.iter().map(|c| c.as_str()), top_n)
    }

    fn capability(&self) -> LinguisticCapability {
        LinguisticCapability::Model
    }
}

/// Count items and keep the `top_n` most frequent. Ties keep first-seen order.
fn most_common<'a>(items: impl Iterator<Item = &'a str>, top_n: usize) -> Vec<Keyphrase> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for item in items {
        total += 1;
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|p| (p, counts[p])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(phrase, frequency)| Keyphrase {
            phrase: phrase.to_string(),
            score: frequency as f64 / total as f64,
            frequency,
        })
        .collect()
}

/// Choose the keyphrase backend once, at construction time.
pub fn select_keyphrase_backend(
    chunker: Option<Arc<dyn NounChunker>>,
    min_len: usize,
) -> Arc<dyn KeyphraseBackend> {
    let capability = LinguisticCapability::detect(chunker.is_some());
    match chunker {
        Some(chunker) => {
            tracing::info!(%capability, "Using noun-chunk keyphrase extraction");
            Arc::new(ChunkedKeyphrases::new(chunker))
        }
        None => {
            tracing::info!(%capability, "No linguistic model, using word-frequency keyphrases");
            Arc::new(FrequencyKeyphrases::new(min_len))
        }
    }
}

/// Top keyphrases reshaped as topics.
pub fn extract_topics(backend: &dyn KeyphraseBackend, text: &str, top_n: usize) -> Vec<Topic> {
    backend
        .extract(text, top_n)
        .into_iter()
        .map(|kp| Topic {
            keywords: kp.phrase.split_whitespace().map(String::from).collect(),
            topic: kp.phrase,
            weight: kp.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChunker(Vec<&'static str>);

    impl NounChunker for FixedChunker {
        fn noun_chunks(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn test_frequency_counts_and_ties() {
        let backend = FrequencyKeyphrases::default();
        let phrases = backend.extract("Payment terms. The payment is late; terms apply to the contract.", 3);
        assert_eq!(phrases[0].phrase, "payment");
        assert_eq!(phrases[0].frequency, 2);
        assert_eq!(phrases[1].phrase, "terms");
        assert_eq!(phrases[2].phrase, "late");
        // payment, terms, payment, late, terms, apply, contract
        assert!((phrases[0].score - 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_respects_min_len() {
        let backend = FrequencyKeyphrases::new(6);
        let phrases = backend.extract("short words only, nothing longer", 10);
        let words: Vec<&str> = phrases.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(words, vec!["nothing", "longer"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(FrequencyKeyphrases::default().extract("", 5).is_empty());
    }

    #[test]
    fn test_chunked_backend() {
        let chunker = Arc::new(FixedChunker(vec!["the contract", "late payment", "the contract"]));
        let backend = ChunkedKeyphrases::new(chunker);
        let phrases = backend.extract("ignored", 5);
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].phrase, "the contract");
        assert_eq!(phrases[0].frequency, 2);
        assert_eq!(backend.capability(), LinguisticCapability::Model);
    }

    #[test]
    fn test_select_backend() {
        let fallback = select_keyphrase_backend(None, 4);
        assert_eq!(fallback.capability(), LinguisticCapability::Frequency);

        let chunker: Arc<dyn NounChunker> = Arc::new(FixedChunker(vec!["x"]));
        let model = select_keyphrase_backend(Some(chunker), 4);
        assert_eq!(model.capability(), LinguisticCapability::Model);
    }

    #[test]
    fn test_topics_split_keywords() {
        let chunker = Arc::new(FixedChunker(vec!["late payment fee"]));
        let backend = ChunkedKeyphrases::new(chunker);
        let topics = extract_topics(&backend, "ignored", 5);
        assert_eq!(topics[0].topic, "late payment fee");
        assert_eq!(topics[0].keywords, vec!["late", "payment", "fee"]);
        assert_eq!(topics[0].weight, 1.0);
    }
}
