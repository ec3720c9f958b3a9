//! trendcheck Utilities - Logging and Configuration Loading
//!
//! This crate holds the process-level concerns that sit around the
//! deterministic pipeline: installing a tracing subscriber and reading
//! configuration files from disk. Nothing in here is called by the core
//! pipeline stages themselves.

//#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod logging;

pub use config::{load_config, load_config_str, ConfigFormat};
pub use logging::{basic_config, get_logger, init_logging, LogLevel, Logger, LoggerConfig};

/// Result type used throughout trendcheck utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}
