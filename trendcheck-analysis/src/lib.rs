//! trendcheck Analysis - Demo Driver and Comparison Harness
//!
//! The collaborators that sit on top of the deterministic core:
//! - [`samples`]: the fixed demo texts and the demo driver
//! - [`variant`]: a jittered pipeline whose randomness is passed in
//! - [`compare`]: repeated runs, stability summaries and report export

#![warn(clippy::all, clippy::pedantic)]

pub mod compare;
pub mod samples;
pub mod variant;

// Re-export main types for convenience
pub use compare::{
    compare, run_parallel, run_repeated, Comparison, ComparisonExporter, RunSummary,
};
pub use samples::{run_demo, DemoEntry, COMPARISON_TEXT, DEFAULT_RUNS, SAMPLE_TEXTS};
pub use variant::{JitteredPipeline, TextAnalyzer, DEFAULT_MAX_JITTER, JITTER_NOTE};

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, trendcheck_core::Error>;
