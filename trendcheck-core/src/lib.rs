//! trendcheck Core - Deterministic Keyword Pipeline
//!
//! This crate provides the pure pipeline stages and the orchestrator that
//! composes them:
//! - [`tokenizer`]: raw text to lowercase alphanumeric tokens
//! - [`keywords`]: bounded, ordered keyword selection
//! - [`scorer`]: modular-arithmetic score over keywords and text length
//! - [`recommender`]: score and keyword count to an [`Action`]
//! - [`pipeline`]: fixed-order composition returning a [`PipelineResult`]
//!
//! Every stage is a total function of its arguments. Nothing here touches
//! the filesystem, prints, logs, or keeps state between calls; the only
//! fallible operation is building a [`PipelineConfig`].

//#![deny(missing_docs)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::multiple_crate_versions,  // Common in large dependency trees
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod config;
pub mod constants;
pub mod keywords;
pub mod models;
pub mod pipeline;
pub mod recommender;
pub mod scorer;
pub mod tokenizer;

// Re-export commonly used types for convenience
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use constants::{PipelineDefaults, EMPTY_SENTINEL, PIPELINE_NOTE};
pub use keywords::{keyword_limit, select_keywords};
pub use models::{Action, PipelineResult, ResultMetadata};
pub use pipeline::{run_pipeline, Pipeline};
pub use recommender::recommend;
pub use scorer::{score, text_length};
pub use tokenizer::tokenize;

/// Result type used throughout trendcheck core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for trendcheck core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration field failed validation
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: u64,
        reason: &'static str,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Utility error (config file loading)
    #[error("Utility error: {0}")]
    Util(#[from] trendcheck_utils::UtilError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
