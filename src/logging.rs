//! Tracing setup.
//!
//! The TUI owns the terminal, so logs go to a file. `--print` runs have no
//! screen to protect and log to stderr instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::Config;

/// `<cache dir>/chroma-tui/chroma-tui.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("chroma-tui").join("chroma-tui.log"))
}

/// Where TUI logs should go: `--log-file`, else the default path
pub fn resolve_log_path(config: &Config) -> Option<PathBuf> {
    config.log_file.clone().or_else(default_log_path)
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = env_filter(config.verbose);

    if config.print {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    // No cache dir on this platform and no --log-file: run without logs
    let Some(path) = resolve_log_path(config) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SchemeMode, SeedColor};

    fn config_with_log(log_file: Option<PathBuf>) -> Config {
        Config {
            seed: SeedColor::default(),
            mode: SchemeMode::default(),
            count: 5,
            base_url: url::Url::parse("https://www.thecolorapi.com").unwrap(),
            timeout: None,
            print: false,
            json: false,
            log_file,
            verbose: false,
        }
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.log");
        let config = config_with_log(Some(path.clone()));
        assert_eq!(resolve_log_path(&config), Some(path));
    }

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("chroma-tui/chroma-tui.log"));
        }
        assert_eq!(resolve_log_path(&config_with_log(None)), default_log_path());
    }
}
