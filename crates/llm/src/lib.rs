//! textbrief summarization core
//!
//! Sentence-aware chunking, hierarchical (map-reduce) summarization over a
//! pluggable summary model, and output formatting. Ships an Ollama-backed model.

mod chunking;
mod client;
mod format;
mod llm_trait;
mod model;
mod policy;
mod prompts;
mod summarize;
mod types;

pub use chunking::{split_into_chunks, split_sentences, word_count};
pub use client::OllamaClient;
pub use format::{format_output, OutputFormat, BULLET_MARKER};
pub use llm_trait::SummaryModel;
pub use model::{build_summarizer, OllamaSummaryModel};
pub use policy::SummaryPolicy;
pub use prompts::{summary_prompt, SYSTEM_PROMPT};
pub use summarize::HierarchicalSummarizer;
pub use types::{
    GenerateOptions, GenerateRequest, GenerateResponse, SummaryOutput, SummaryParams,
    SummaryRequest,
};
