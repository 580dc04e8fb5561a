use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Route tracing output to the log file; the terminal belongs to the UI
pub fn init(config: &Config) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
