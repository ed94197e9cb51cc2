//! Linguistic capability detection.

use serde::{Deserialize, Serialize};

/// Which linguistic backend is driving model-dependent features
/// (currently keyphrase extraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinguisticCapability {
    /// No language model: word-frequency heuristics only.
    Frequency,
    /// A noun-phrase chunker is available.
    Model,
}

impl LinguisticCapability {
    /// Pick the capability given whether a chunker was supplied.
    pub fn detect(has_chunker: bool) -> Self {
        if has_chunker {
            Self::Model
        } else {
            Self::Frequency
        }
    }
}

impl std::fmt::Display for LinguisticCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Model => write!(f, "model"),
        }
    }
}
