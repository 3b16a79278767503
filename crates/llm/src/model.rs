use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use textbrief_common::{AppConfig, Result};
use tracing::debug;

use crate::client::OllamaClient;
use crate::llm_trait::SummaryModel;
use crate::policy::SummaryPolicy;
use crate::prompts::{summary_prompt, SYSTEM_PROMPT};
use crate::summarize::HierarchicalSummarizer;
use crate::types::{GenerateOptions, GenerateRequest, SummaryOutput, SummaryParams};

/// Nucleus sampling cutoff used with randomized decoding
const SAMPLING_TOP_P: f32 = 0.9;

/// Summary model served by Ollama
pub struct OllamaSummaryModel {
    client: OllamaClient,
    model: String,
}

impl OllamaSummaryModel {
    /// Create new Ollama-backed summary model
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the Ollama request for one summarization call
    fn build_request(&self, text: &str, params: &SummaryParams) -> GenerateRequest {
        let options = if params.do_sample {
            GenerateOptions {
                temperature: params.temperature,
                top_p: Some(SAMPLING_TOP_P),
                num_predict: Some(token_budget(params.max_length)),
            }
        } else {
            GenerateOptions {
                temperature: Some(0.0),
                top_p: None,
                num_predict: Some(token_budget(params.max_length)),
            }
        };

        GenerateRequest {
            model: self.model.clone(),
            prompt: summary_prompt(text, params.min_length, params.max_length),
            system: Some(SYSTEM_PROMPT.to_string()),
            stream: Some(false),
            options: Some(options),
        }
    }
}

/// Build the process-wide summarizer backed by Ollama
///
/// Called once at startup; the result is shared by every request.
pub fn build_summarizer(config: &AppConfig) -> Result<HierarchicalSummarizer> {
    let policy = SummaryPolicy::default().with_chunk_max_chars(config.chunk_max_chars);
    policy.validate()?;

    let client = OllamaClient::new(
        config.ollama_base_url.as_str(),
        Duration::from_secs(config.llm_timeout_secs),
        config.llm_max_attempts,
    )?;
    let model = OllamaSummaryModel::new(client, config.llm_model.as_str());

    Ok(HierarchicalSummarizer::new(Arc::new(model), policy))
}

/// Clamp a length bound into Ollama's `num_predict` range
fn token_budget(max_length: usize) -> i32 {
    i32::try_from(max_length).unwrap_or(i32::MAX)
}

#[async_trait]
impl SummaryModel for OllamaSummaryModel {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<SummaryOutput> {
        debug!(
            "Ollama summarize - Model: {}, Input: {} chars, Bounds: {}..={}, Sampled: {}",
            self.model,
            text.len(),
            params.min_length,
            params.max_length,
            params.do_sample
        );

        let request = self.build_request(text, params);
        let response = self.client.generate(&request).await?;

        Ok(SummaryOutput::new(response.trim()))
    }

    fn name(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.test_connection().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> OllamaSummaryModel {
        let client = OllamaClient::new("http://localhost:11434", Duration::from_secs(5), 1).unwrap();
        OllamaSummaryModel::new(client, "llama3.2")
    }

    #[test]
    fn test_model_creation() {
        assert_eq!(model().name(), "llama3.2");
    }

    #[test]
    fn test_deterministic_request() {
        let request = model().build_request("The cat sat.", &SummaryParams::deterministic(10, 20));
        let options = request.options.unwrap();
        assert_eq!(options.temperature, Some(0.0));
        assert_eq!(options.top_p, None);
        assert_eq!(options.num_predict, Some(20));
        assert_eq!(request.stream, Some(false));
        assert!(request.prompt.contains("between 10 and 20 words"));
    }

    #[test]
    fn test_sampled_request() {
        let request = model().build_request("Long text.", &SummaryParams::sampled(60, 200, 0.8));
        let options = request.options.unwrap();
        assert_eq!(options.temperature, Some(0.8));
        assert_eq!(options.top_p, Some(SAMPLING_TOP_P));
        assert_eq!(options.num_predict, Some(200));
    }

    #[test]
    fn test_build_summarizer_from_config() {
        let mut config = AppConfig::default();
        config.chunk_max_chars = 800;

        let summarizer = build_summarizer(&config).unwrap();
        assert_eq!(summarizer.model_name(), "llama3.2:latest");
        assert_eq!(summarizer.policy().chunk_max_chars, 800);

        config.chunk_max_chars = 0;
        assert!(build_summarizer(&config).is_err());
    }

    #[test]
    fn test_token_budget_clamps() {
        assert_eq!(token_budget(250), 250);
        assert_eq!(token_budget(usize::MAX), i32::MAX);
    }
}
