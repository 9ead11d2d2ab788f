//! Application configuration stored as TOML in the app directory.
//!
//! Every field carries a serde default so absent files and configs written by
//! older versions keep loading. A missing file yields the defaults; a
//! malformed one is an error the caller surfaces at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    app_dirs::{self, AppDirError},
    profile::Profile,
};

/// Filename of the app configuration inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Disable overlay and scroll animations (states still switch instantly).
    pub reduce_motion: bool,
    /// Optional profile TOML filename inside the app directory. When unset,
    /// the built-in default profile is used.
    pub profile_file: Option<String>,
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Failed to prepare app directory: {0}")]
    AppDir(#[from] AppDirError),
    /// Reading a config or profile file failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Parsing a config or profile file failed.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Serializing the config to TOML failed.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Writing the config file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Path of the config file inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from(&config_path()?)
}

/// Load the configuration from an explicit path (defaults when absent).
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save the configuration into the app directory.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save the configuration to an explicit path.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the profile the page renders: the override file named by the
/// config when present, the built-in default otherwise.
pub fn load_profile(config: &AppConfig) -> Result<Profile, ConfigError> {
    let Some(file_name) = config.profile_file.as_deref() else {
        return Ok(Profile::default());
    };
    load_profile_from(&app_dirs::app_root_dir()?.join(file_name))
}

/// Load a profile TOML from an explicit path.
pub fn load_profile_from(path: &Path) -> Result<Profile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
