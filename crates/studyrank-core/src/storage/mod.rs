mod activity_store;
mod config;

pub use activity_store::ActivityStore;
pub use config::{AdvisorConfig, Config, ListConfig, RefreshConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the studyrank data directory, creating it if needed.
///
/// `STUDYRANK_DATA_DIR` wins when set. Otherwise the directory is
/// `~/.config/studyrank`, or `~/.config/studyrank-dev` when `STUDYRANK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYRANK_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYRANK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyrank-dev")
            } else {
                base_dir.join("studyrank")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
