//! Core pieces of the SkyCast dashboard: configuration, the error
//! taxonomy behind every user-facing notification, and logging setup.

pub mod config;
pub mod error;

pub use config::{ApiConfig, Config, LocationConfig};
pub use error::{AppError, ConfigError, WeatherError};

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Initialize logging.
///
/// Output goes to `skycast.log` under the config directory rather than
/// stdout: the dashboard owns the terminal's alternate screen for its
/// entire lifetime.
pub fn init() -> Result<()> {
    let log_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skycast");
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("skycast.log"))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!("SkyCast core initialized");
    Ok(())
}
