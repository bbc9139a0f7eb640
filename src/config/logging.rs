//! Logging setup
//!
//! The library only emits `tracing` events. The binary installs a subscriber
//! that writes to stderr, leaving stdout free for command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{LedgerError, LedgerResult};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "LEDGER_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `debug` or `account_ledger=trace`
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `LEDGER_LOG`, then `RUST_LOG`, falling back to `warn`
    pub fn from_env() -> Self {
        let log_level = std::env::var(LOG_ENV_VAR)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Self { log_level }
    }

    /// Replace the level when one was given explicitly
    pub fn with_override(mut self, log_level: Option<String>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    pub fn filter(&self) -> LedgerResult<EnvFilter> {
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            LedgerError::Config(format!("Invalid log level '{}': {}", self.log_level, e))
        })
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> LedgerResult<()> {
    tracing_subscriber::registry()
        .with(config.filter()?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialise logging: {}", e)))
}
