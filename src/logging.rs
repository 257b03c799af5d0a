//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to `paydesk.log` in the
//! data directory. The filter comes from `PAYDESK_LOG`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Build the filter, falling back to `info` for an unparsable directive.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the configured log file.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(config: &ClientConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = open_log_file(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_filter_falls_back() {
        assert_eq!(env_filter("debug").to_string(), "debug");
        assert_eq!(env_filter("paydesk=[").to_string(), "info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let config = ClientConfig::new().with_data_dir(dir.path().join("nested"));
        init_logging(&config).unwrap();
        assert!(config.log_path().exists());
    }
}
