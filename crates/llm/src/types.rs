use serde::{Deserialize, Serialize};
use textbrief_common::{BriefError, Result};

use crate::format::OutputFormat;

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "llama3.2", "gemma2")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// System prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct GenerateOptions {
    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model name
    pub model: String,

    /// Generated text
    pub response: String,

    /// Whether generation is complete
    pub done: bool,
}

/// Length bounds and sampling mode for one model call
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryParams {
    /// Minimum summary length (model tokens)
    pub min_length: usize,

    /// Maximum summary length (model tokens)
    pub max_length: usize,

    /// Randomized sampling instead of deterministic decoding
    pub do_sample: bool,

    /// Sampling temperature, only meaningful with `do_sample`
    pub temperature: Option<f32>,
}

impl SummaryParams {
    /// Deterministic decoding within the given bounds
    pub fn deterministic(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            do_sample: false,
            temperature: None,
        }
    }

    /// Sampled decoding at `temperature`
    pub fn sampled(min_length: usize, max_length: usize, temperature: f32) -> Self {
        Self {
            min_length,
            max_length,
            do_sample: true,
            temperature: Some(temperature),
        }
    }
}

/// Result of one model call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryOutput {
    /// Generated summary text
    pub summary_text: String,
}

impl SummaryOutput {
    /// Create new output
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}

/// A validated summarization request
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Trimmed, non-empty input text
    pub text: String,

    /// Requested output layout
    pub format: OutputFormat,
}

impl SummaryRequest {
    /// Trim the raw text and reject it if nothing is left
    pub fn new(raw_text: &str, format: OutputFormat) -> Result<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(BriefError::EmptyInput);
        }

        Ok(Self {
            text: text.to_string(),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_text() {
        let request = SummaryRequest::new("  hello world \n", OutputFormat::Bullets).unwrap();
        assert_eq!(request.text, "hello world");
        assert_eq!(request.format, OutputFormat::Bullets);
    }

    #[test]
    fn test_request_rejects_blank_text() {
        let err = SummaryRequest::new(" \t\n ", OutputFormat::Paragraph).unwrap_err();
        assert!(matches!(err, BriefError::EmptyInput));
    }

    #[test]
    fn test_generate_request_skips_empty_fields() {
        let request = GenerateRequest {
            model: "llama3.2".to_string(),
            prompt: "hi".to_string(),
            system: None,
            stream: Some(false),
            options: Some(GenerateOptions {
                temperature: Some(0.0),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["options"]["temperature"], 0.0);
        assert!(json["options"].get("top_p").is_none());
    }

    #[test]
    fn test_params_constructors() {
        let params = SummaryParams::deterministic(10, 20);
        assert!(!params.do_sample);
        assert_eq!(params.temperature, None);

        let params = SummaryParams::sampled(60, 200, 0.8);
        assert!(params.do_sample);
        assert_eq!(params.temperature, Some(0.8));
    }
}
