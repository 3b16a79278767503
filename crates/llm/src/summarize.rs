use std::sync::Arc;
use textbrief_common::{BriefError, Result, SummaryStage};
use tracing::{debug, info, warn};

use crate::chunking::{split_into_chunks, word_count};
use crate::format::format_output;
use crate::llm_trait::SummaryModel;
use crate::policy::SummaryPolicy;
use crate::types::{SummaryParams, SummaryRequest};

/// Summarizer for arbitrarily long text using a two-tier map-reduce strategy
///
/// Short input is summarized in one deterministic call. Long input is split
/// into chunks, each chunk is summarized, and the joined chunk summaries are
/// summarized once more into the final text.
pub struct HierarchicalSummarizer {
    model: Arc<dyn SummaryModel>,
    policy: SummaryPolicy,
}

impl HierarchicalSummarizer {
    /// Create new summarizer
    pub fn new(model: Arc<dyn SummaryModel>, policy: SummaryPolicy) -> Self {
        Self { model, policy }
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn policy(&self) -> &SummaryPolicy {
        &self.policy
    }

    /// Check that the underlying model is reachable
    pub async fn health_check(&self) -> Result<bool> {
        self.model.health_check().await
    }

    /// Summarize a request and lay the result out in its format
    pub async fn summarize_request(&self, request: &SummaryRequest) -> Result<String> {
        let summary = self.summarize_text(&request.text).await?;
        Ok(format_output(&summary, request.format))
    }

    /// Summarize text, choosing the direct or chunked path by word count
    pub async fn summarize_text(&self, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BriefError::EmptyInput);
        }

        let words = word_count(text);
        info!(
            "Starting summarization - Text length: {} chars, {} words",
            text.chars().count(),
            words
        );

        if self.policy.is_short(words) {
            debug!("Text is short, using direct summarization");
            let params = self.policy.short_params(words);
            return self.call_model(SummaryStage::Short, text, &params).await;
        }

        self.summarize_chunked(text).await
    }

    /// Long path: summarize every chunk, then summarize the joined summaries
    async fn summarize_chunked(&self, text: &str) -> Result<String> {
        let chunks = split_into_chunks(text, self.policy.chunk_max_chars);
        info!("Split text into {} chunks", chunks.len());

        let chunk_params = self.policy.chunk_params();
        let mut partial_summaries = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Summarizing chunk {}/{}", i + 1, chunks.len());
            let summary = self
                .call_model(SummaryStage::Chunk, chunk, &chunk_params)
                .await?;
            partial_summaries.push(summary);
        }

        let combined = partial_summaries.join(" ");
        info!(
            "Combined chunk summaries - Length: {} chars, {} words",
            combined.chars().count(),
            word_count(&combined)
        );

        self.call_model(SummaryStage::Final, &combined, &self.policy.final_params())
            .await
    }

    /// One model call, with failures tagged by pipeline stage
    async fn call_model(
        &self,
        stage: SummaryStage,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String> {
        match self.model.summarize(text, params).await {
            Ok(output) => Ok(output.summary_text.trim().to_string()),
            Err(e) => {
                warn!("Summarization failed at {} stage: {}", stage, e);
                Err(BriefError::summarization(stage, e.to_string()))
            }
        }
    }
}
