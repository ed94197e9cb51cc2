//! Sentence and paragraph segmentation.
//!
//! A deliberately small segmenter: sentence boundaries are terminal
//! punctuation followed by whitespace, paragraphs are blank-line separated.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]").unwrap());

/// Split after `.`, `!` or `?` followed by whitespace; trailing text is a sentence too.
pub fn segment_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let terminal = matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if terminal {
            push_trimmed(&mut sentences, &text[start..=i]);
            start = i + 1;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

/// Split text into paragraphs on the blank-line separator.
///
/// Empty pieces are kept so paragraph indices line up with the source.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

/// Count word and punctuation tokens ("42%" is two tokens).
pub fn word_count(text: &str) -> usize {
    WORD_TOKEN_RE.find_iter(text).count()
}
