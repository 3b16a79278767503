use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chunking::split_sentences;

/// Prefix for each bullet line
pub const BULLET_MARKER: &str = "• ";

/// Output layout of the final summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary text as produced
    #[default]
    Paragraph,
    /// One bullet per sentence
    Bullets,
}

impl OutputFormat {
    /// Parse a user-supplied value; anything but "bullets" means paragraph
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("bullets") {
            Self::Bullets
        } else {
            Self::Paragraph
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Bullets => "bullets",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lay out a summary in the requested format
pub fn format_output(summary: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Paragraph => summary.to_string(),
        OutputFormat::Bullets => split_sentences(summary)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}{}", BULLET_MARKER, s))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
