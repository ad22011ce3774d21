//! Path management for FloraNova configuration files.
//!
//! ```text
//! ~/.config/floranova/         # Config directory (XDG on Linux)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for floranova_core::FloraError {
    fn from(err: PathError) -> Self {
        floranova_core::FloraError::config(err.to_string())
    }
}

const APP_DIR: &str = "floranova";
const CONFIG_FILE: &str = "config.toml";

pub struct FloraPaths;

impl FloraPaths {
    /// Returns the FloraNova configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/floranova/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
