//! Tracing setup
//!
//! Command-line runs log to stderr so stdout stays clean for results. The
//! interactive guide owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::Result;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// `RUST_LOG` wins over `--log-level` when set
fn env_filter(log_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()))
}

/// Initialize tracing to stderr. `json` switches to structured output.
pub fn initialize_tracing(log_level: LogLevel, json: bool) {
    if json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter(log_level))
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(log_level))
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Initialize tracing into an append-only log file
pub fn initialize_file_tracing(log_level: LogLevel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Where the interactive guide writes its log
pub fn default_log_path() -> PathBuf {
    directories::ProjectDirs::from("com", "connector-guide", "connector-guide")
        .map(|dirs| dirs.data_local_dir().join("guide.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("connector-guide.log"))
}
