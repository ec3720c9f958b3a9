//! Pipeline configuration
//!
//! [`PipelineConfig`] names every threshold the pipeline stages use. Its
//! fields are private: the only ways to obtain one are [`Default`],
//! [`PipelineConfigBuilder::build`], and deserialization, and the last two
//! share one validation routine. A zero modulus therefore cannot reach the
//! scorer or recommender.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::PipelineDefaults;
use crate::{Error, Result};

/// Immutable, validated pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PipelineConfigBuilder")]
pub struct PipelineConfig {
    max_keywords_short: usize,
    max_keywords_long: usize,
    long_text_token_threshold: usize,
    mod_base: u64,
    extra_mod_from_text_len: u64,
    action_mod: u64,
    panic_reorder_threshold: u64,
    simulate_latency_ms: u64,
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Start a builder pre-filled with this configuration's values
    pub fn to_builder(&self) -> PipelineConfigBuilder {
        PipelineConfigBuilder {
            max_keywords_short: self.max_keywords_short,
            max_keywords_long: self.max_keywords_long,
            long_text_token_threshold: self.long_text_token_threshold,
            mod_base: self.mod_base,
            extra_mod_from_text_len: self.extra_mod_from_text_len,
            action_mod: self.action_mod,
            panic_reorder_threshold: self.panic_reorder_threshold,
            simulate_latency_ms: self.simulate_latency_ms,
        }
    }

    /// Load a TOML, JSON or YAML file. Keys that are absent keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(trendcheck_utils::load_config(path)?)
    }

    pub const fn max_keywords_short(&self) -> usize {
        self.max_keywords_short
    }

    pub const fn max_keywords_long(&self) -> usize {
        self.max_keywords_long
    }

    pub const fn long_text_token_threshold(&self) -> usize {
        self.long_text_token_threshold
    }

    pub const fn mod_base(&self) -> u64 {
        self.mod_base
    }

    pub const fn extra_mod_from_text_len(&self) -> u64 {
        self.extra_mod_from_text_len
    }

    pub const fn action_mod(&self) -> u64 {
        self.action_mod
    }

    pub const fn panic_reorder_threshold(&self) -> u64 {
        self.panic_reorder_threshold
    }

    pub const fn simulate_latency_ms(&self) -> u64 {
        self.simulate_latency_ms
    }

    /// Latency to simulate before a run, or `None` when disabled
    pub const fn simulate_latency(&self) -> Option<Duration> {
        if self.simulate_latency_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.simulate_latency_ms))
        }
    }

    /// Largest keyword count any text can produce under this configuration
    pub fn max_keywords(&self) -> usize {
        self.max_keywords_short.max(self.max_keywords_long)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_keywords_short: PipelineDefaults::MAX_KEYWORDS_SHORT,
            max_keywords_long: PipelineDefaults::MAX_KEYWORDS_LONG,
            long_text_token_threshold: PipelineDefaults::LONG_TEXT_TOKEN_THRESHOLD,
            mod_base: PipelineDefaults::MOD_BASE,
            extra_mod_from_text_len: PipelineDefaults::EXTRA_MOD_FROM_TEXT_LEN,
            action_mod: PipelineDefaults::ACTION_MOD,
            panic_reorder_threshold: PipelineDefaults::PANIC_REORDER_THRESHOLD,
            simulate_latency_ms: PipelineDefaults::SIMULATE_LATENCY_MS,
        }
    }
}

impl std::fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "max_keywords_short        = {}", self.max_keywords_short)?;
        writeln!(f, "max_keywords_long         = {}", self.max_keywords_long)?;
        writeln!(f, "long_text_token_threshold = {}", self.long_text_token_threshold)?;
        writeln!(f, "mod_base                  = {}", self.mod_base)?;
        writeln!(f, "extra_mod_from_text_len   = {}", self.extra_mod_from_text_len)?;
        writeln!(f, "action_mod                = {}", self.action_mod)?;
        writeln!(f, "panic_reorder_threshold   = {}", self.panic_reorder_threshold)?;
        write!(f, "simulate_latency_ms       = {}", self.simulate_latency_ms)
    }
}

/// Unvalidated configuration values.
///
/// Also the serde shape of a configuration file: every key is optional and
/// falls back to [`PipelineDefaults`]; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfigBuilder {
    max_keywords_short: usize,
    max_keywords_long: usize,
    long_text_token_threshold: usize,
    mod_base: u64,
    extra_mod_from_text_len: u64,
    action_mod: u64,
    panic_reorder_threshold: u64,
    simulate_latency_ms: u64,
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        PipelineConfig::default().to_builder()
    }
}

impl PipelineConfigBuilder {
    #[must_use]
    pub const fn max_keywords_short(mut self, value: usize) -> Self {
        self.max_keywords_short = value;
        self
    }

    #[must_use]
    pub const fn max_keywords_long(mut self, value: usize) -> Self {
        self.max_keywords_long = value;
        self
    }

    #[must_use]
    pub const fn long_text_token_threshold(mut self, value: usize) -> Self {
        self.long_text_token_threshold = value;
        self
    }

    #[must_use]
    pub const fn mod_base(mut self, value: u64) -> Self {
        self.mod_base = value;
        self
    }

    #[must_use]
    pub const fn extra_mod_from_text_len(mut self, value: u64) -> Self {
        self.extra_mod_from_text_len = value;
        self
    }

    #[must_use]
    pub const fn action_mod(mut self, value: u64) -> Self {
        self.action_mod = value;
        self
    }

    #[must_use]
    pub const fn panic_reorder_threshold(mut self, value: u64) -> Self {
        self.panic_reorder_threshold = value;
        self
    }

    #[must_use]
    pub const fn simulate_latency_ms(mut self, value: u64) -> Self {
        self.simulate_latency_ms = value;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        require_positive("max_keywords_short", self.max_keywords_short as u64)?;
        require_positive("max_keywords_long", self.max_keywords_long as u64)?;
        require_positive("long_text_token_threshold", self.long_text_token_threshold as u64)?;
        require_positive("mod_base", self.mod_base)?;
        require_positive("extra_mod_from_text_len", self.extra_mod_from_text_len)?;
        require_positive("action_mod", self.action_mod)?;
        require_positive("panic_reorder_threshold", self.panic_reorder_threshold)?;

        Ok(PipelineConfig {
            max_keywords_short: self.max_keywords_short,
            max_keywords_long: self.max_keywords_long,
            long_text_token_threshold: self.long_text_token_threshold,
            mod_base: self.mod_base,
            extra_mod_from_text_len: self.extra_mod_from_text_len,
            action_mod: self.action_mod,
            panic_reorder_threshold: self.panic_reorder_threshold,
            simulate_latency_ms: self.simulate_latency_ms,
        })
    }
}

impl TryFrom<PipelineConfigBuilder> for PipelineConfig {
    type Error = Error;

    fn try_from(builder: PipelineConfigBuilder) -> Result<Self> {
        builder.build()
    }
}

fn require_positive(field: &'static str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidConfig {
            field,
            value,
            reason: "must be a positive integer",
        });
    }
    Ok(())
}
