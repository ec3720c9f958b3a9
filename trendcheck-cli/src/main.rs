//! trendcheck Main CLI Entry Point
//!
//! Thin boundary around the pipeline: loads configuration, runs the core or
//! the comparison harness, and prints what comes back. All printing and
//! logging for the workspace happens here.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use trendcheck_analysis::{
    compare, run_demo, run_parallel, ComparisonExporter, DemoEntry, COMPARISON_TEXT,
};
use trendcheck_core::{run_pipeline, PipelineConfig, PipelineResult};
use trendcheck_utils::{basic_config, get_logger, LogLevel};

#[derive(Parser)]
#[command(name = "trendcheck")]
#[command(about = "trendcheck - deterministic keyword scoring and stock action recommendations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pipeline configuration file (TOML, JSON or YAML)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated latency in milliseconds (0 disables it)
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warning, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline over one text
    Run {
        /// Text to analyze
        text: String,
    },

    /// Run the pipeline over the built-in sample texts
    Demo,

    /// Run the deterministic and jittered pipelines repeatedly and compare stability
    Compare {
        /// Number of runs per pipeline
        #[arg(short = 'n', long, default_value = "5")]
        runs: NonZeroUsize,

        /// Text to run (defaults to the first sample text)
        #[arg(short = 't', long)]
        text: Option<String>,

        /// Seed for the jittered pipeline (OS entropy when omitted)
        #[arg(short = 's', long)]
        seed: Option<u64>,

        /// Also run the deterministic pipeline concurrently and check it agrees
        #[arg(long)]
        parallel: bool,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON document
    Json,
    /// Markdown report
    Markdown,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    basic_config(Some(cli.log_level))?;
    let logger = get_logger("trendcheck.cli");

    let config = resolve_config(cli.config.as_deref(), cli.latency_ms)?;
    logger.debug(&format!("Effective configuration:\n{config}"));

    match cli.command {
        Commands::Run { text } => {
            let result = run_pipeline(&text, &config);
            print_result(&text, &result, cli.format)?;
        }

        Commands::Demo => {
            let entries = run_demo(&config);
            print_demo(&entries, cli.format)?;
        }

        Commands::Compare {
            runs,
            text,
            seed,
            parallel,
        } => {
            let text = text.unwrap_or_else(|| COMPARISON_TEXT.to_string());
            let comparison = compare(&config, &text, runs, seed);

            match cli.format {
                OutputFormat::Text => println!("{comparison}"),
                OutputFormat::Json => println!("{}", ComparisonExporter::to_json(&comparison)?),
                OutputFormat::Markdown => print!("{}", ComparisonExporter::to_markdown(&comparison)),
            }

            if parallel {
                let concurrent = run_parallel(&config, &text, runs);
                if concurrent.score_values != comparison.deterministic.score_values {
                    bail!("parallel runs disagreed with sequential runs");
                }
                if cli.format == OutputFormat::Text {
                    println!("\n{concurrent}");
                }
            }

            if !comparison.deterministic_is_stable() {
                bail!(
                    "deterministic pipeline produced {} distinct scores and {} distinct actions",
                    comparison.deterministic.unique_scores,
                    comparison.deterministic.unique_actions
                );
            }
        }

        Commands::Config => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            OutputFormat::Text | OutputFormat::Markdown => println!("{config}"),
        },
    }

    Ok(())
}

/// Load the configuration file if given, then apply command-line overrides
fn resolve_config(path: Option<&Path>, latency_ms: Option<u64>) -> Result<PipelineConfig> {
    let config = match path {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    match latency_ms {
        Some(ms) => Ok(config.to_builder().simulate_latency_ms(ms).build()?),
        None => Ok(config),
    }
}

fn print_result(text: &str, result: &PipelineResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("=== REPORT ===");
            println!("text: {text:?}");
            println!("{result}");
            println!("==============");
        }
        OutputFormat::Json => println!("{}", result.to_json_pretty()?),
        OutputFormat::Markdown => {
            println!("{}", markdown_header());
            println!("{}", markdown_row(text, result));
        }
    }
    Ok(())
}

fn print_demo(entries: &[DemoEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                print_result(&entry.text, &entry.result, format)?;
                println!();
            }
            println!("Run it again with the same input: the output will be identical.");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
        OutputFormat::Markdown => {
            println!("{}", markdown_header());
            for entry in entries {
                println!("{}", markdown_row(&entry.text, &entry.result));
            }
        }
    }
    Ok(())
}

fn markdown_header() -> &'static str {
    "| Text | Keywords | Score | Action | Tokens |\n|------|----------|-------|--------|--------|"
}

fn markdown_row(text: &str, result: &PipelineResult) -> String {
    format!(
        "| `{}` | {} | {} | {} | {} |",
        text.replace('|', "\\|"),
        result.keywords.join(", "),
        result.score,
        result.action,
        result.metadata.token_count
    )
}
