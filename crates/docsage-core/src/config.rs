//! Analysis configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_TOP_LINES: usize = 10;
pub const DEFAULT_MAX_SYNONYMS: usize = 5;
pub const DEFAULT_KEYPHRASE_COUNT: usize = 10;
pub const DEFAULT_MIN_KEYPHRASE_LEN: usize = 4;

/// Tunables shared by every analysis entry point.
///
/// Built once at startup and passed by reference; components never read
/// the environment themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many ranked sentences `rank_top` keeps.
    pub top_lines: usize,
    /// Upper bound on synonym expansion.
    pub max_synonyms: usize,
    /// How many keyphrases to report.
    pub keyphrase_count: usize,
    /// Minimum token length for the frequency keyphrase fallback.
    pub min_keyphrase_len: usize,
    /// Extra synonym entries (JSON object of term -> synonyms).
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_lines: DEFAULT_TOP_LINES,
            max_synonyms: DEFAULT_MAX_SYNONYMS,
            keyphrase_count: DEFAULT_KEYPHRASE_COUNT,
            min_keyphrase_len: DEFAULT_MIN_KEYPHRASE_LEN,
            lexicon_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let lexicon_path = match lookup("DOCSAGE_LEXICON") {
            Some(p) if !p.trim().is_empty() => {
                let path = PathBuf::from(p.trim());
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "lexicon file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            _ => None,
        };

        Ok(Self {
            top_lines: number("DOCSAGE_TOP_LINES", DEFAULT_TOP_LINES),
            max_synonyms: number("DOCSAGE_MAX_SYNONYMS", DEFAULT_MAX_SYNONYMS),
            keyphrase_count: number("DOCSAGE_KEYPHRASES", DEFAULT_KEYPHRASE_COUNT),
            min_keyphrase_len: DEFAULT_MIN_KEYPHRASE_LEN,
            lexicon_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.top_lines, 10);
        assert_eq!(config.max_synonyms, 5);
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("DOCSAGE_TOP_LINES", "3"),
            ("DOCSAGE_MAX_SYNONYMS", "not-a-number"),
        ]))
        .unwrap();
        assert_eq!(config.top_lines, 3);
        assert_eq!(config.max_synonyms, DEFAULT_MAX_SYNONYMS);
    }

    #[test]
    fn test_missing_lexicon_is_error() {
        let result = AnalysisConfig::from_lookup(lookup_from(&[(
            "DOCSAGE_LEXICON",
            "/definitely/not/here.json",
        )]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_existing_lexicon_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, "{}").unwrap();
        let config = AnalysisConfig::from_lookup(lookup_from(&[(
            "DOCSAGE_LEXICON",
            path.to_str().unwrap(),
        )]))
        .unwrap();
        assert_eq!(config.lexicon_path.as_deref(), Some(path.as_path()));
    }
}
