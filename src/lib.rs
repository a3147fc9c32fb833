pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod search;

use std::sync::Arc;

use config::Config;
use extract::ArticleExtractor;
use llm::ModelJudge;
use search::SearchProvider;

/// Application state shared across handlers. The outbound collaborators are
/// injected behind traits so tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: Arc<dyn ArticleExtractor>,
    /// Queried in order; contributions are concatenated before dedup.
    pub search_providers: Vec<Arc<dyn SearchProvider>>,
    pub judge: Arc<dyn ModelJudge>,
}
