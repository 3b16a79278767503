mod index;
mod summarize;
mod system;

use actix_web::web;

/// Form extractor settings; actix's 16 KiB default is far too small for documents
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default().limit(limit)
}

/// Register every route on an actix `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index)
        .service(summarize::summarize)
        .service(system::health);
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use textbrief_common::{AppConfig, BriefError, Result};
    use textbrief_llm::{
        HierarchicalSummarizer, SummaryModel, SummaryOutput, SummaryParams, SummaryPolicy,
    };

    use crate::state::AppState;

    /// Model stub: echoes a fixed reply or fails, and records inputs
    pub struct StubModel {
        pub reply: std::result::Result<String, String>,
        pub inputs: Mutex<Vec<String>>,
    }

    impl StubModel {
        pub fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                inputs: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(cause: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(cause.to_string()),
                inputs: Mutex::new(Vec::new()),
            })
        }

        pub fn call_count(&self) -> usize {
            self.inputs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SummaryModel for StubModel {
        async fn summarize(&self, text: &str, _params: &SummaryParams) -> Result<SummaryOutput> {
            self.inputs.lock().unwrap().push(text.to_string());
            match &self.reply {
                Ok(reply) => Ok(SummaryOutput::new(reply.as_str())),
                Err(cause) => Err(BriefError::llm(cause.as_str())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    pub fn state_with(model: Arc<StubModel>, config: AppConfig) -> Arc<AppState> {
        let summarizer = HierarchicalSummarizer::new(model, SummaryPolicy::default());
        Arc::new(AppState::new(config, Arc::new(summarizer)))
    }
}
