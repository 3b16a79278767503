use serde::{Deserialize, Serialize};

/// Form body of `POST /summarize`
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    /// Text to summarize; a missing field counts as empty
    #[serde(default)]
    pub text: String,

    /// "paragraph" (default) or "bullets"
    #[serde(default)]
    pub format: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}
