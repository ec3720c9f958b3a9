//! Pipeline Default Thresholds
//!
//! Default values for [`crate::PipelineConfig`]. Each constant backs one
//! configuration field; nothing in the pipeline stages reads these directly.

use serde::{Deserialize, Serialize};

/// Default keyword, scoring and action thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDefaults;

impl PipelineDefaults {
    /// Keyword selection
    pub const MAX_KEYWORDS_SHORT: usize = 2;          // Keywords kept for short texts
    pub const MAX_KEYWORDS_LONG: usize = 3;           // Keywords kept for long texts
    pub const LONG_TEXT_TOKEN_THRESHOLD: usize = 17;  // Token count above which a text is long

    /// Scoring moduli
    pub const MOD_BASE: u64 = 7;                      // Applied to each keyword length
    pub const EXTRA_MOD_FROM_TEXT_LEN: u64 = 13;      // Applied to the original text length

    /// Action selection
    pub const ACTION_MOD: u64 = 5;                    // score % ACTION_MOD compared to keyword count
    pub const PANIC_REORDER_THRESHOLD: u64 = 42;      // Scores strictly above this panic

    /// Cosmetic latency before each run, in milliseconds (0 disables)
    pub const SIMULATE_LATENCY_MS: u64 = 50;
}

