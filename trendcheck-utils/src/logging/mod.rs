//! Logging utilities built on the tracing ecosystem
//!
//! Binaries call [`init_logging`] (or [`basic_config`]) once at startup.
//! Library code outside the core pipeline asks for a named [`Logger`] and
//! logs through it; everything ends up as tracing events.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warning => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!(
                "Invalid log level: '{s}'. Valid options: trace, debug, info, warning, error"
            )),
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub include_location: bool,
    pub include_thread_id: bool,
    pub colored_output: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            include_location: false,
            include_thread_id: false,
            colored_output: true,
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides `config.level` when set. Output goes to stderr so
/// that reports printed on stdout stay machine-readable.
pub fn init_logging(config: LoggerConfig) -> crate::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::from(config.level).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(config.include_thread_id)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(config.colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| crate::UtilError::Logging(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Initialize logging with defaults and an optional level
pub fn basic_config(level: Option<LogLevel>) -> crate::Result<()> {
    let config = LoggerConfig {
        level: level.unwrap_or(LogLevel::Info),
        ..Default::default()
    };
    init_logging(config)
}

/// Named logger; the name is attached to every event as the `logger` field
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    level: LogLevel,
}

impl Logger {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: LogLevel::Trace,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Check if a level passes this logger's own floor
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, message: &str) {
        if self.is_enabled(LogLevel::Debug) {
            tracing::debug!(logger = %self.name, "{message}");
        }
    }

    pub fn info(&self, message: &str) {
        if self.is_enabled(LogLevel::Info) {
            tracing::info!(logger = %self.name, "{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        if self.is_enabled(LogLevel::Warning) {
            tracing::warn!(logger = %self.name, "{message}");
        }
    }

    pub fn error(&self, message: &str) {
        if self.is_enabled(LogLevel::Error) {
            tracing::error!(logger = %self.name, "{message}");
        }
    }
}

/// Get a logger by name
pub fn get_logger(name: &str) -> Logger {
    Logger::new(name)
}
