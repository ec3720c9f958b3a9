//! Pipeline Orchestrator
//!
//! Runs the stages in a fixed order: optional latency, tokenize, select
//! keywords, score against the original text, recommend, assemble. There is
//! no branching on anything outside the arguments, so two calls with equal
//! text and configuration return equal results.

use crate::constants::PIPELINE_NOTE;
use crate::keywords::select_keywords;
use crate::models::{PipelineResult, ResultMetadata};
use crate::recommender::recommend;
use crate::scorer::{score, text_length};
use crate::tokenizer::tokenize;
use crate::PipelineConfig;

/// Run the full pipeline over `text`.
///
/// Blocks the calling thread for `config.simulate_latency()` first when
/// latency simulation is enabled; the sleep has no effect on the result.
pub fn run_pipeline(text: &str, config: &PipelineConfig) -> PipelineResult {
    if let Some(latency) = config.simulate_latency() {
        std::thread::sleep(latency);
    }

    let tokens = tokenize(text);
    let token_count = tokens.len();
    let keywords = select_keywords(tokens, config);
    let score = score(&keywords, text, config);
    let action = recommend(&keywords, score, config);

    PipelineResult {
        keywords,
        score,
        action,
        metadata: ResultMetadata {
            text_len: text_length(text),
            token_count,
            note: PIPELINE_NOTE.to_string(),
        },
    }
}

/// A pipeline bound to one configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, text: &str) -> PipelineResult {
        run_pipeline(text, &self.config)
    }
}
