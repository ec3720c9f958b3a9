//! Comparison Harness
//!
//! Runs an analyzer repeatedly over one fixed text and summarizes how many
//! distinct scores and actions it produced. The deterministic pipeline must
//! always come out with exactly one of each; the jittered variant usually
//! does not.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use trendcheck_core::{run_pipeline, Action, Pipeline, PipelineConfig, PipelineResult};
use trendcheck_utils::get_logger;

use crate::variant::{JitteredPipeline, TextAnalyzer};

/// Stability summary of repeated runs over one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub runs: usize,
    pub elapsed_secs: f64,
    pub score_values: Vec<u64>,
    pub unique_scores: usize,
    pub unique_actions: usize,
    pub action_counts: BTreeMap<Action, usize>,
}

impl RunSummary {
    /// Summarize `results`, in the order they were produced
    pub fn from_results(label: &str, results: &[PipelineResult], elapsed: Duration) -> Self {
        let score_values: Vec<u64> = results.iter().map(|r| r.score).collect();
        let unique_scores = score_values.iter().collect::<BTreeSet<_>>().len();

        let mut action_counts = BTreeMap::new();
        for result in results {
            *action_counts.entry(result.action).or_insert(0) += 1;
        }

        Self {
            label: label.to_string(),
            runs: results.len(),
            elapsed_secs: elapsed.as_secs_f64(),
            score_values,
            unique_scores,
            unique_actions: action_counts.len(),
            action_counts,
        }
    }

    /// True when every run produced the same score and the same action
    pub fn is_stable(&self) -> bool {
        self.unique_scores == 1 && self.unique_actions == 1
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.label.to_uppercase())?;
        writeln!(f, "runs: {}", self.runs)?;
        writeln!(f, "time: {:.4} sec", self.elapsed_secs)?;
        writeln!(f, "unique_scores: {}", self.unique_scores)?;
        writeln!(f, "scores: {:?}", self.score_values)?;
        writeln!(f, "unique_actions: {}", self.unique_actions)?;
        let counts: Vec<String> = self
            .action_counts
            .iter()
            .map(|(action, count)| format!("{action}: {count}"))
            .collect();
        writeln!(f, "action_counts: {{{}}}", counts.join(", "))?;
        writeln!(f, "stable: {}", if self.is_stable() { "yes" } else { "no" })?;
        write!(f, "========================")
    }
}

/// Run `analyzer` over `text` `runs` times, one after another
pub fn run_repeated<A>(analyzer: &mut A, text: &str, runs: NonZeroUsize) -> RunSummary
where
    A: TextAnalyzer + ?Sized,
{
    let logger = get_logger("trendcheck.analysis.compare");
    logger.info(&format!("Running {} analyzer {} times", analyzer.name(), runs));

    let start = Instant::now();
    let results: Vec<PipelineResult> = (0..runs.get()).map(|_| analyzer.analyze(text)).collect();
    let summary = RunSummary::from_results(analyzer.name(), &results, start.elapsed());

    if summary.is_stable() {
        logger.info(&format!("{} analyzer stable across {} runs", summary.label, summary.runs));
    } else {
        logger.warning(&format!(
            "{} analyzer unstable: {} distinct scores, {} distinct actions",
            summary.label, summary.unique_scores, summary.unique_actions
        ));
    }

    summary
}

/// Run the deterministic pipeline `runs` times concurrently on the rayon pool
pub fn run_parallel(config: &PipelineConfig, text: &str, runs: NonZeroUsize) -> RunSummary {
    let logger = get_logger("trendcheck.analysis.parallel");
    logger.info(&format!("Running deterministic pipeline {runs} times in parallel"));

    let start = Instant::now();
    let results: Vec<PipelineResult> = (0..runs.get())
        .into_par_iter()
        .map(|_| run_pipeline(text, config))
        .collect();

    RunSummary::from_results("deterministic (parallel)", &results, start.elapsed())
}

/// Side-by-side summaries of the deterministic and jittered pipelines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub text: String,
    pub generated_at: DateTime<Utc>,
    pub deterministic: RunSummary,
    pub jittered: RunSummary,
}

impl Comparison {
    /// The check the harness exists for: the core pipeline never drifts
    pub fn deterministic_is_stable(&self) -> bool {
        self.deterministic.is_stable()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.jittered)?;
        writeln!(f)?;
        writeln!(f, "{}", self.deterministic)?;
        writeln!(f)?;
        writeln!(f, "Interpretation:")?;
        writeln!(
            f,
            "- jittered pipeline: {}",
            if self.jittered.is_stable() {
                "no drift observed in this sample"
            } else {
                "score and/or action drift"
            }
        )?;
        write!(
            f,
            "- deterministic pipeline: {}",
            if self.deterministic.is_stable() {
                "same input -> same output"
            } else {
                "UNSTABLE"
            }
        )
    }
}

/// Run both pipelines `runs` times on `text`.
///
/// With `seed` the jittered run is reproducible; without it the jitter is
/// seeded from OS entropy.
pub fn compare(
    config: &PipelineConfig,
    text: &str,
    runs: NonZeroUsize,
    seed: Option<u64>,
) -> Comparison {
    let mut jittered = match seed {
        Some(seed) => JitteredPipeline::seeded(config.clone(), seed),
        None => JitteredPipeline::from_entropy(config.clone()),
    };
    let mut deterministic = Pipeline::new(config.clone());

    Comparison {
        text: text.to_string(),
        generated_at: Utc::now(),
        jittered: run_repeated(&mut jittered, text, runs),
        deterministic: run_repeated(&mut deterministic, text, runs),
    }
}

/// Renders a [`Comparison`] for humans or machines
pub struct ComparisonExporter;

impl ComparisonExporter {
    pub fn to_json(comparison: &Comparison) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(comparison)?)
    }

    pub fn to_markdown(comparison: &Comparison) -> String {
        let mut markdown = String::new();

        markdown.push_str("# trendcheck Comparison Report\n\n");
        markdown.push_str(&format!("**Text:** `{}`\n", comparison.text));
        markdown.push_str(&format!(
            "**Generated:** {}\n\n",
            comparison.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        markdown.push_str("| Pipeline | Runs | Unique scores | Unique actions | Stable | Time (s) |\n");
        markdown.push_str("|----------|------|---------------|----------------|--------|----------|\n");
        for summary in [&comparison.deterministic, &comparison.jittered] {
            markdown.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.4} |\n",
                summary.label,
                summary.runs,
                summary.unique_scores,
                summary.unique_actions,
                if summary.is_stable() { "yes" } else { "no" },
                summary.elapsed_secs
            ));
        }

        for summary in [&comparison.deterministic, &comparison.jittered] {
            markdown.push_str(&format!("\n## {}\n\n", summary.label));
            markdown.push_str(&format!("- **Scores:** {:?}\n", summary.score_values));
            for (action, count) in &summary.action_counts {
                markdown.push_str(&format!("- **{action}:** {count}\n"));
            }
        }

        markdown
    }
}
