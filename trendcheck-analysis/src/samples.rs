//! Demo texts and the demo driver.

use serde::Serialize;
use trendcheck_core::{run_pipeline, PipelineConfig, PipelineResult};
use trendcheck_utils::get_logger;

/// Fixed demo inputs; the last one exercises the empty-input path
pub const SAMPLE_TEXTS: [&str; 4] = [
    "Trend XYZ is going viral on TikTok: chunky sneakers, metallic laces, bright outsole.",
    "Quiet luxury is fading; loud logos are back with neon accents.",
    "Berlin winter fit: long coats, muted colors, but bold sneakers.",
    "",
];

/// Text the comparison harness runs repeatedly
pub const COMPARISON_TEXT: &str = SAMPLE_TEXTS[0];

/// Default number of comparison runs
pub const DEFAULT_RUNS: usize = 5;

/// One demo input and the result it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoEntry {
    pub text: String,
    pub result: PipelineResult,
}

/// Run the pipeline over every text in [`SAMPLE_TEXTS`]
pub fn run_demo(config: &PipelineConfig) -> Vec<DemoEntry> {
    let logger = get_logger("trendcheck.analysis.demo");
    logger.info(&format!("Running demo over {} sample texts", SAMPLE_TEXTS.len()));

    SAMPLE_TEXTS
        .iter()
        .map(|text| {
            let result = run_pipeline(text, config);
            logger.debug(&format!(
                "text_len={} score={} action={}",
                result.metadata.text_len, result.score, result.action
            ));
            DemoEntry {
                text: (*text).to_string(),
                result,
            }
        })
        .collect()
}
