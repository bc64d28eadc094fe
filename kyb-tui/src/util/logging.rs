//! Log file setup
//!
//! The terminal is owned by the UI, so logs go to
//! `<data-dir>/kyb-explorer/kyb-explorer.log`. Library crates log through
//! the `log` facade; the subscriber picks those records up as well.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "kyb-explorer.log";

/// Location of the log file
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kyb-explorer")
        .join(LOG_FILE_NAME)
}

/// Install the global subscriber (`RUST_LOG` overrides the `info` default)
pub fn init_logging() -> Result<()> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}
