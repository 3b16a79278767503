use crate::error::BriefError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// textbrief application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Summarization model name
    pub llm_model: String,

    /// Per-call timeout for the model, in seconds
    pub llm_timeout_secs: u64,

    /// Transport attempts per model call (1 = no retry)
    pub llm_max_attempts: u32,

    /// Character budget of a single chunk
    pub chunk_max_chars: usize,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Largest accepted form body, in bytes
    pub max_form_bytes: usize,

    /// HTML form served at `/`
    pub template_path: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            llm_model: "llama3.2:latest".to_string(),
            llm_timeout_secs: 300,
            llm_max_attempts: 1,
            chunk_max_chars: 1200,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            max_form_bytes: 16 * 1024 * 1024,
            template_path: PathBuf::from("templates/index.html"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BriefError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            llm_model: std::env::var("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: Self::get_env_parsed("LLM_TIMEOUT_SECS")?
                .unwrap_or(defaults.llm_timeout_secs),
            llm_max_attempts: Self::get_env_parsed("LLM_MAX_ATTEMPTS")?
                .unwrap_or(defaults.llm_max_attempts),
            chunk_max_chars: Self::get_env_parsed("CHUNK_MAX_CHARS")?
                .unwrap_or(defaults.chunk_max_chars),
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT")?.unwrap_or(defaults.server_port),
            max_form_bytes: Self::get_env_parsed("MAX_FORM_BYTES")?
                .unwrap_or(defaults.max_form_bytes),
            template_path: Self::get_env_path("TEMPLATE_PATH").unwrap_or(defaults.template_path),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Parse a numeric environment variable, failing loudly on garbage
    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, BriefError> {
        match std::env::var(key) {
            Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
                BriefError::config(format!("{} has an invalid value: {:?}", key, raw))
            }),
            Err(_) => Ok(None),
        }
    }

    /// Get log file path
    pub fn get_log_path(&self, filename: &str) -> PathBuf {
        self.log_dir.join(filename)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BriefError> {
        if self.llm_model.trim().is_empty() {
            return Err(BriefError::config("LLM model name cannot be empty"));
        }

        // Validate Ollama URL
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(BriefError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        if self.llm_max_attempts == 0 {
            return Err(BriefError::config("LLM attempts must be at least 1"));
        }

        if self.chunk_max_chars == 0 {
            return Err(BriefError::config("Chunk size cannot be 0"));
        }

        if self.max_form_bytes == 0 {
            return Err(BriefError::config("Form size limit cannot be 0"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(BriefError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
