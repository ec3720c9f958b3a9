//! Pipeline Result Model
//!
//! The record returned by one pipeline invocation. It is built once, owned
//! by the caller, and carries no timing or environment data, so equal
//! inputs give equal records and byte-identical JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Action;

/// Outcome of running the pipeline over one text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Selected keywords, in text order
    pub keywords: Vec<String>,
    /// Score computed from the keywords and original text length
    pub score: u64,
    /// Recommended action
    pub action: Action,
    /// Descriptive data about the input
    pub metadata: ResultMetadata,
}

/// Descriptive data attached to a [`PipelineResult`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Length of the original text in characters
    pub text_len: usize,
    /// Number of tokens the text produced (before keyword selection)
    pub token_count: usize,
    pub note: String,
}

impl PipelineResult {
    /// Render as compact JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as indented JSON
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PipelineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keywords: {:?}", self.keywords)?;
        writeln!(f, "score: {}", self.score)?;
        writeln!(f, "action: {}", self.action)?;
        write!(f, "meta: {}", self.metadata)
    }
}

impl fmt::Display for ResultMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{text_len: {}, token_count: {}, note: {:?}}}",
            self.text_len, self.token_count, self.note
        )
    }
}
