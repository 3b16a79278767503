use async_trait::async_trait;
use textbrief_common::Result;

use crate::types::{SummaryOutput, SummaryParams};

/// Text-to-summary capability the pipeline depends on
///
/// Implementations must be safe to call repeatedly; the summarizer calls them
/// sequentially within a request and never retries a failed call.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Summarize `text` within the given length bounds
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<SummaryOutput>;

    /// Model name, for logs and health output
    fn name(&self) -> &str;

    /// Test connection/availability
    async fn health_check(&self) -> Result<bool>;
}
