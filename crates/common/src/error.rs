use std::fmt;

/// Pipeline call site where the summarization model failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStage {
    /// Single direct call for short input
    Short,
    /// Per-chunk call on the long path
    Chunk,
    /// Final call over the combined chunk summaries
    Final,
}

impl SummaryStage {
    /// Stage identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Chunk => "chunk",
            Self::Final => "final",
        }
    }

    /// User-facing message prefix for a failure at this stage
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Short => "Error generating summary",
            Self::Chunk => "Error summarizing chunk",
            Self::Final => "Error in final summarization",
        }
    }
}

impl fmt::Display for SummaryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// textbrief error types
#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    /// No usable text was submitted
    #[error("Please provide text to summarize.")]
    EmptyInput,

    /// The summarization model failed at one of the pipeline stages
    #[error("{}: {}", .stage.failure_message(), .cause)]
    Summarization { stage: SummaryStage, cause: String },

    /// LLM related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BriefError {
    /// Create summarization failure for a stage
    pub fn summarization<S: Into<String>>(stage: SummaryStage, cause: S) -> Self {
        Self::Summarization {
            stage,
            cause: cause.into(),
        }
    }

    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Stage of a summarization failure, if this is one
    pub fn stage(&self) -> Option<SummaryStage> {
        match self {
            Self::Summarization { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

// HTTP response conversion (used by the actix-web layer)
impl BriefError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyInput => 400,
            Self::Summarization { .. } => 500,
            Self::Llm(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Network(_) => 503,
            Self::Io(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        let err = BriefError::EmptyInput;
        assert_eq!(err.to_string(), "Please provide text to summarize.");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_summarization_message_names_stage() {
        let err = BriefError::summarization(SummaryStage::Chunk, "model offline");
        assert_eq!(err.to_string(), "Error summarizing chunk: model offline");
        assert_eq!(err.stage(), Some(SummaryStage::Chunk));
        assert_eq!(err.status_code(), 500);

        let err = BriefError::summarization(SummaryStage::Final, "timeout");
        assert_eq!(err.to_string(), "Error in final summarization: timeout");

        let err = BriefError::summarization(SummaryStage::Short, "boom");
        assert_eq!(err.to_string(), "Error generating summary: boom");
    }

    #[test]
    fn test_stage_as_str() {
        assert_eq!(SummaryStage::Short.to_string(), "short");
        assert_eq!(SummaryStage::Chunk.to_string(), "chunk");
        assert_eq!(SummaryStage::Final.to_string(), "final");
        assert_eq!(BriefError::llm("x").stage(), None);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: BriefError = io.into();
        assert!(matches!(err, BriefError::Io(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(BriefError::network("down").status_code(), 503);
    }
}
