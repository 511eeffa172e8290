mod config;
pub mod session;

pub use config::{AnalysisConfig, Config, DisplayConfig};
pub use session::Session;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the taskrank data directory, creating it if needed.
///
/// `TASKRANK_DATA_DIR` wins when set. Otherwise `~/.config/taskrank`, or
/// `~/.config/taskrank-dev` when `TASKRANK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("TASKRANK_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TASKRANK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("taskrank-dev")
            } else {
                base_dir.join("taskrank")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
