//! Constants module for trendcheck core
//!
//! Default values for every configurable threshold, plus the fixed strings
//! that appear in pipeline output.

pub mod pipeline_defaults;

pub use pipeline_defaults::PipelineDefaults;

/// Keyword returned when the text yields no tokens at all.
///
/// Empty input is a well-defined case: it selects this single keyword and is
/// then scored like any other keyword list.
pub const EMPTY_SENTINEL: &str = "empty";

/// Descriptive note attached to every deterministic result's metadata
pub const PIPELINE_NOTE: &str =
    "Deterministic pipeline: the same text and configuration always yield the same result.";
