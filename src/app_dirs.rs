//! Application directory helpers anchored to a single `.folio` folder.
//!
//! Config and log files live under one dot-folder in the OS config root
//! (e.g., `%APPDATA%` on Windows). A `FOLIO_CONFIG_HOME` environment
//! override supports tests and portable setups.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".folio";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the root `.folio` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(resolve_base()?.join(APP_DIR_NAME))
}

/// Return the logs directory inside the `.folio` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Override, then environment, then the platform config dir.
fn resolve_base() -> Result<PathBuf, AppDirError> {
    let overridden = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone());
    if let Some(path) = overridden {
        return Ok(path);
    }
    if let Ok(path) = std::env::var("FOLIO_CONFIG_HOME") {
        return Ok(PathBuf::from(path));
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(AppDirError::NoBaseDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct OverrideGuard;

    impl OverrideGuard {
        fn set(path: PathBuf) -> Self {
            *CONFIG_BASE_OVERRIDE.lock().unwrap() = Some(path);
            Self
        }
    }

    impl Drop for OverrideGuard {
        fn drop(&mut self) {
            *CONFIG_BASE_OVERRIDE.lock().unwrap() = None;
        }
    }

    #[test]
    fn override_pins_root_and_logs_dirs() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let root = app_root_dir().unwrap();
        assert_eq!(root, base.path().join(APP_DIR_NAME));
        assert!(root.is_dir());
        let logs = logs_dir().unwrap();
        assert_eq!(logs, root.join("logs"));
        assert!(logs.is_dir());
    }
}
