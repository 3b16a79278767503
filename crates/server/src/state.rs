use std::sync::Arc;
use textbrief_common::AppConfig;
use textbrief_llm::HierarchicalSummarizer;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarizer built once at startup
    pub summarizer: Arc<HierarchicalSummarizer>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, summarizer: Arc<HierarchicalSummarizer>) -> Self {
        Self { config, summarizer }
    }
}
