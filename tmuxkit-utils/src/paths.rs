//! Path utilities for tmuxkit
//!
//! Handles XDG Base Directory specification compliance for config,
//! state and data directories.

use std::path::{Path, PathBuf};
use directories::{BaseDirs, ProjectDirs};

/// Application identifier for XDG directories
const APP_NAME: &str = "tmuxkit";

/// Get project directories
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/tmuxkit` or `~/.config/tmuxkit`
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(fallback_config_dir)
}

/// Get the main configuration file path
///
/// Location: `$XDG_CONFIG_HOME/tmuxkit/config.toml`
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the state directory
///
/// Location: `$XDG_STATE_HOME/tmuxkit` or `~/.local/state/tmuxkit`
pub fn state_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(fallback_state_dir)
}

/// Get the log directory
///
/// Location: `$XDG_STATE_HOME/tmuxkit/log`
pub fn log_dir() -> PathBuf {
    state_dir().join("log")
}

/// Get the data directory
///
/// Location: `$XDG_DATA_HOME/tmuxkit` or `~/.local/share/tmuxkit`
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(fallback_data_dir)
}

/// Get the directory where saved session files live
///
/// Location: `$XDG_DATA_HOME/tmuxkit/sessions`
pub fn sessions_dir() -> PathBuf {
    data_dir().join("sessions")
}

/// Expand a leading `~/` to the current user's home directory
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) if path.to_string_lossy().starts_with("~/") => home_dir().join(rest),
        _ => path.to_path_buf(),
    }
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        tracing::debug!("creating directory {}", path.display());
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

// Fallback implementations when ProjectDirs is unavailable

fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| std::env::var("HOME").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

fn fallback_config_dir() -> PathBuf {
    home_dir().join(".config").join(APP_NAME)
}

fn fallback_state_dir() -> PathBuf {
    home_dir().join(".local").join("state").join(APP_NAME)
}

fn fallback_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join(APP_NAME)
}
