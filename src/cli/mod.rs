//! Command-line interface.
//!
//! `main` calls [`run_cli_command`] before touching the terminal; only
//! [`CliCommand::Run`] continues into the full-screen client.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::adapters::FileSessionStorage;
use crate::config::ClientConfig;
use crate::traits::SessionStorage;

/// Run an informational command.
///
/// Returns `None` for [`CliCommand::Run`]. `Version` never returns.
pub async fn run_cli_command(command: &CliCommand, config: &ClientConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Logout => Some(handle_logout_command(config).await),
        CliCommand::Run { .. } => None,
    }
}

async fn handle_logout_command(config: &ClientConfig) -> Result<()> {
    let storage = FileSessionStorage::new(&config.data_dir);
    storage.clear().await?;
    println!("Signed out; removed {}", storage.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_returns_none() {
        let config = ClientConfig::default();
        assert!(run_cli_command(&CliCommand::Run { api_url: None }, &config)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_logout_removes_session_file() {
        let dir = TempDir::new().unwrap();
        let config = ClientConfig::default().with_data_dir(dir.path());
        std::fs::write(config.session_path(), "{}").unwrap();

        let result = run_cli_command(&CliCommand::Logout, &config).await;
        assert!(matches!(result, Some(Ok(()))));
        assert!(!config.session_path().exists());
    }
}
