use textbrief_common::{BriefError, Result};

use crate::types::SummaryParams;

/// Floor for the short-path minimum length
const SHORT_MIN_FLOOR: usize = 10;

/// Floor for the short-path maximum length
const SHORT_MAX_FLOOR: usize = 20;

/// Headroom added to the word count for the short-path maximum
const SHORT_MAX_HEADROOM: usize = 10;

/// Length and sampling policy for the summarization pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPolicy {
    /// Inputs with fewer words take the single-call path
    pub short_word_threshold: usize,

    /// Character budget per chunk on the long path
    pub chunk_max_chars: usize,

    /// Bounds for each chunk summary
    pub chunk_min_length: usize,
    pub chunk_max_length: usize,

    /// Bounds for the final combine pass
    pub final_min_length: usize,
    pub final_max_length: usize,

    /// Temperature for the sampled (chunk and final) calls
    pub sampling_temperature: f32,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            short_word_threshold: 40,
            chunk_max_chars: 1200,
            chunk_min_length: 60,
            chunk_max_length: 200,
            final_min_length: 80,
            final_max_length: 250,
            sampling_temperature: 0.8,
        }
    }
}

impl SummaryPolicy {
    /// Override the chunk budget
    pub fn with_chunk_max_chars(mut self, chunk_max_chars: usize) -> Self {
        self.chunk_max_chars = chunk_max_chars;
        self
    }

    /// Whether an input of `word_count` words takes the single-call path
    pub fn is_short(&self, word_count: usize) -> bool {
        word_count < self.short_word_threshold
    }

    /// Deterministic bounds scaled to a short input
    pub fn short_params(&self, word_count: usize) -> SummaryParams {
        SummaryParams::deterministic(
            SHORT_MIN_FLOOR.max(word_count / 2),
            SHORT_MAX_FLOOR.max(word_count + SHORT_MAX_HEADROOM),
        )
    }

    /// Fixed sampled bounds for one chunk
    pub fn chunk_params(&self) -> SummaryParams {
        SummaryParams::sampled(
            self.chunk_min_length,
            self.chunk_max_length,
            self.sampling_temperature,
        )
    }

    /// Fixed sampled bounds for the combine pass
    pub fn final_params(&self) -> SummaryParams {
        SummaryParams::sampled(
            self.final_min_length,
            self.final_max_length,
            self.sampling_temperature,
        )
    }

    /// Reject budgets the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_max_chars == 0 {
            return Err(BriefError::config("Chunk size cannot be 0"));
        }

        if self.chunk_min_length > self.chunk_max_length
            || self.final_min_length > self.final_max_length
        {
            return Err(BriefError::config("Minimum summary length exceeds maximum"));
        }

        if !(0.0..=2.0).contains(&self.sampling_temperature) {
            return Err(BriefError::config(format!(
                "Sampling temperature out of range: {}",
                self.sampling_temperature
            )));
        }

        Ok(())
    }
}
