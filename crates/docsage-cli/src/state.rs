//! Components built once at startup and handed to every command.

use std::sync::Arc;

use docsage_core::{AnalysisConfig, Result};
use docsage_extract::{select_keyphrase_backend, DocumentClassifier, KeyphraseBackend};
use docsage_search::{SmartSearchEngine, SynonymTable};
use tracing::info;

pub struct AppState {
    pub config: AnalysisConfig,
    pub classifier: DocumentClassifier,
    pub search: SmartSearchEngine,
    pub keyphrases: Arc<dyn KeyphraseBackend>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let synonyms = Arc::new(SynonymTable::load(config.lexicon_path.as_deref())?);
        info!("Synonym lexicon ready ({} terms)", synonyms.len());

        // The CLI ships without a linguistic model.
        let keyphrases = select_keyphrase_backend(None, config.min_keyphrase_len);
        let search = SmartSearchEngine::new(synonyms, config.max_synonyms);

        Ok(Self {
            config,
            classifier: DocumentClassifier::default(),
            search,
            keyphrases,
        })
    }
}
