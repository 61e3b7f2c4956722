//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for text and JSON output.
//! `CLASSALARM_LOG` overrides the configured level.

use classalarm_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CLASSALARM_LOG";

pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
