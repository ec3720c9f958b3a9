//! Jittered pipeline variant
//!
//! Runs the deterministic pipeline, then adds a random offset in
//! `0..=max_jitter` to the score and re-derives the action. The random
//! source is owned by the variant and supplied by the caller: a seeded
//! generator reproduces the same sequence of results, an entropy-seeded one
//! does not. The variant keeps no other state and performs no I/O.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trendcheck_core::{recommend, Pipeline, PipelineConfig, PipelineResult};

/// Largest offset added to a score by default
pub const DEFAULT_MAX_JITTER: u64 = 2;

/// Note attached to results produced by [`JitteredPipeline`]
pub const JITTER_NOTE: &str = "Jittered variant: score includes a random offset.";

/// Something that turns a text into a [`PipelineResult`]
pub trait TextAnalyzer {
    /// Short label used in reports
    fn name(&self) -> &str;

    fn analyze(&mut self, text: &str) -> PipelineResult;
}

impl TextAnalyzer for Pipeline {
    fn name(&self) -> &str {
        "deterministic"
    }

    fn analyze(&mut self, text: &str) -> PipelineResult {
        self.run(text)
    }
}

/// Pipeline whose score is offset by an injected random source
#[derive(Debug, Clone)]
pub struct JitteredPipeline<R> {
    pipeline: Pipeline,
    rng: R,
    max_jitter: u64,
}

impl<R: Rng> JitteredPipeline<R> {
    pub fn new(config: PipelineConfig, rng: R) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            rng,
            max_jitter: DEFAULT_MAX_JITTER,
        }
    }

    #[must_use]
    pub fn with_max_jitter(mut self, max_jitter: u64) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    pub const fn max_jitter(&self) -> u64 {
        self.max_jitter
    }

    pub fn run(&mut self, text: &str) -> PipelineResult {
        let mut result = self.pipeline.run(text);

        result.score += self.rng.gen_range(0..=self.max_jitter);
        result.action = recommend(&result.keywords, result.score, self.pipeline.config());
        result.metadata.note = JITTER_NOTE.to_string();

        result
    }
}

impl JitteredPipeline<ChaCha8Rng> {
    /// Reproducible variant: the same seed yields the same result sequence
    pub fn seeded(config: PipelineConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Variant seeded from OS entropy
    pub fn from_entropy(config: PipelineConfig) -> Self {
        Self::new(config, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> TextAnalyzer for JitteredPipeline<R> {
    fn name(&self) -> &str {
        "jittered"
    }

    fn analyze(&mut self, text: &str) -> PipelineResult {
        self.run(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trendcheck_core::run_pipeline;

    fn no_latency() -> PipelineConfig {
        PipelineConfig::builder().simulate_latency_ms(0).build().unwrap()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = JitteredPipeline::seeded(no_latency(), 7);
        let mut b = JitteredPipeline::seeded(no_latency(), 7);

        let first: Vec<_> = (0..10).map(|_| a.run("ab cd").score).collect();
        let second: Vec<_> = (0..10).map(|_| b.run("ab cd").score).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_jitter_matches_core_except_note() {
        let config = no_latency();
        let mut variant = JitteredPipeline::seeded(config.clone(), 1).with_max_jitter(0);

        let jittered = variant.run("Quiet luxury is fading");
        let core = run_pipeline("Quiet luxury is fading", &config);

        assert_eq!(jittered.keywords, core.keywords);
        assert_eq!(jittered.score, core.score);
        assert_eq!(jittered.action, core.action);
        assert_eq!(jittered.metadata.note, JITTER_NOTE);
    }

    #[test]
    fn test_jitter_eventually_varies() {
        let mut variant = JitteredPipeline::seeded(no_latency(), 42);
        let scores: std::collections::BTreeSet<u64> =
            (0..50).map(|_| variant.run("ab cd").score).collect();
        assert!(scores.len() > 1);
    }

    #[test]
    fn test_analyzer_names() {
        let core = Pipeline::new(no_latency());
        let variant = JitteredPipeline::seeded(no_latency(), 0);
        assert_eq!(TextAnalyzer::name(&core), "deterministic");
        assert_eq!(variant.name(), "jittered");
    }

    proptest! {
        #[test]
        fn jitter_stays_in_range(seed in any::<u64>(), max_jitter in 0u64..10) {
            let config = no_latency();
            let base = run_pipeline("ab cd", &config).score;
            let mut variant = JitteredPipeline::seeded(config, seed).with_max_jitter(max_jitter);
            for _ in 0..5 {
                let result = variant.run("ab cd");
                prop_assert!(result.score >= base);
                prop_assert!(result.score <= base + max_jitter);
            }
        }
    }
}
