//! Data models module for trendcheck core
//!
//! The action vocabulary and the immutable record a pipeline run returns.

pub mod action;
pub mod pipeline_result;

pub use action::Action;
pub use pipeline_result::{PipelineResult, ResultMetadata};
