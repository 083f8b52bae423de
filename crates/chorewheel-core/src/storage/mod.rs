mod config;
mod json_store;

pub use config::{Config, RandomConfig, RetentionConfig};
pub use json_store::JsonStore;

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Returns `~/.config/chorewheel[-dev]/` based on CHOREWHEEL_ENV.
///
/// Set CHOREWHEEL_ENV=dev to use the development data directory.
/// CHOREWHEEL_HOME, when set, is used as-is instead.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("CHOREWHEEL_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir().ok_or(StoreError::NoDataDir)?.join(".config");
            let env = std::env::var("CHOREWHEEL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("chorewheel-dev")
            } else {
                base_dir.join("chorewheel")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
