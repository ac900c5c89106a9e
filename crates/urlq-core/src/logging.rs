//! Logging init: append to a file under the XDG state dir, or log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. The library logs under `urlq_core`,
/// the binary under `urlq`.
pub const DEFAULT_FILTER: &str = "info,urlq=debug,urlq_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join("urlq.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

/// Plain-text subscriber writing every event to `file`.
fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}

/// Initialize structured logging to `~/.local/state/urlq/urlq.log`.
/// Returns Err when the file cannot be opened; the caller falls back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlq")?;
    let (file, path) = open_log_file(&xdg_dirs.get_state_home().join("urlq"))?;

    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))?;
    tracing::info!("urlq logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
