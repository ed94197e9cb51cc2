//! Closed-vocabulary synonym lexicon for contract, legal, and finance terms.

use std::collections::HashMap;
use std::path::Path;

use docsage_core::{Error, Result};
use tracing::info;

/// Built-in lexicon: term → synonyms, most useful first.
pub const BUILTIN_LEXICON: &[(&str, &[&str])] = &[
    ("agreement", &["contract", "deal", "arrangement", "accord", "pact"]),
    ("contract", &["agreement", "deal", "arrangement", "covenant"]),
    ("termination", &["cancellation", "ending", "conclusion", "cessation"]),
    ("clause", &["provision", "section", "article", "term"]),
    ("payment", &["compensation", "remuneration", "fee", "charge"]),
    ("invoice", &["bill", "receipt", "statement", "account"]),
    ("date", &["time", "period", "deadline", "term"]),
    ("amount", &["sum", "total", "value", "quantity"]),
    ("party", &["entity", "organization", "company", "individual"]),
    ("obligation", &["duty", "responsibility", "commitment", "requirement"]),
];

/// Lowercase term → ordered synonyms.
///
/// Built once at startup and only read afterwards; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_LEXICON.iter().map(|&(term, synonyms)| {
            (
                term.to_string(),
                synonyms.iter().map(|s| s.to_string()).collect(),
            )
        }))
    }

    /// Table from in-memory entries. Terms are lowercased; synonyms are kept as given.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(term, synonyms)| (term.to_lowercase(), synonyms))
                .collect(),
        }
    }

    /// Built-in lexicon with entries from a JSON file (`{"term": ["syn", ...]}`)
    /// merged over it. A file entry replaces the built-in entry for that term.
    pub fn with_overrides(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let extra: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
            .map_err(|e| Error::Lexicon(format!("{}: {}", path.display(), e)))?;

        let mut table = Self::builtin();
        for (term, synonyms) in extra {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                return Err(Error::Lexicon(format!("{}: empty term", path.display())));
            }
            if synonyms.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::Lexicon(format!(
                    "{}: empty synonym for {:?}",
                    path.display(),
                    term
                )));
            }
            let synonyms = synonyms.iter().map(|s| s.trim().to_string()).collect();
            table.entries.insert(term, synonyms);
        }
        info!("Loaded synonym lexicon from {} ({} terms)", path.display(), table.len());
        Ok(table)
    }

    /// Load from an optional override file, falling back to the built-in lexicon.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::with_overrides(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Up to `max_synonyms` synonyms for `term`; empty when the term is unknown.
    pub fn get_synonyms(&self, term: &str, max_synonyms: usize) -> Vec<String> {
        self.entries
            .get(&term.to_lowercase())
            .map(|s| s.iter().take(max_synonyms).cloned().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
