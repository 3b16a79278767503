//! Prompt templates for summarization

/// System prompt shared by every summarization call
pub const SYSTEM_PROMPT: &str = "You are a precise summarizer. \
Write a faithful, self-contained summary in plain prose. \
Use only facts stated in the text. Do not add headings, lists, commentary or a preamble.";

/// Prompt asking for a summary within a length range
///
/// Bounds are model tokens; for a prompted model they are stated as words,
/// which is close enough for English prose.
pub fn summary_prompt(text: &str, min_length: usize, max_length: usize) -> String {
    format!(
        "Summarize the following text in between {} and {} words.\n\nText:\n{}\n\nSummary:",
        min_length, max_length, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_states_bounds() {
        let prompt = summary_prompt("The cat sat.", 10, 20);
        assert!(prompt.contains("between 10 and 20 words"));
        assert!(prompt.contains("The cat sat."));
        assert!(prompt.ends_with("Summary:"));
    }
}
