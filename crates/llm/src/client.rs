use reqwest::Client;
use std::time::Duration;
use textbrief_common::{BriefError, Result};
use tracing::{debug, info, warn};

use crate::types::{GenerateRequest, GenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
    max_attempts: u32,
}

impl OllamaClient {
    /// Create new Ollama client
    ///
    /// `max_attempts` of 1 sends each request once.
    pub fn new(base_url: impl Into<String>, timeout: Duration, max_attempts: u32) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BriefError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Ollama client initialized: {} (timeout {:?}, attempts {})",
            base_url, timeout, max_attempts
        );
        Ok(Self {
            base_url,
            client,
            max_attempts: max_attempts.max(1),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate text with Ollama
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let mut attempt = 1;
        loop {
            match self.try_generate(&url, request).await {
                Ok(response) => {
                    debug!("Received response from Ollama - Length: {}", response.len());
                    return Ok(response);
                }
                Err(e) if attempt < self.max_attempts => {
                    let delay = Duration::from_secs(2u64.pow(attempt - 1));
                    warn!(
                        "Ollama request failed (attempt {}/{}): {}. Retrying in {:?}...",
                        attempt, self.max_attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single attempt to generate text
    async fn try_generate(&self, url: &str, request: &GenerateRequest) -> Result<String> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| BriefError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| BriefError::llm(format!("Ollama API error: {}", e)))?;

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BriefError::llm(format!("Failed to parse response: {}", e)))?;

        if result.response.trim().is_empty() {
            return Err(BriefError::llm(format!("Empty response from model {}", result.model)));
        }

        Ok(result.response)
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BriefError::network(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new("http://localhost:11434/", Duration::from_secs(5), 0).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
        assert_eq!(client.max_attempts, 1);
    }
}
