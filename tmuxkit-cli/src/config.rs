//! Tool settings loaded from `config.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tmuxkit_utils::{config_file, expand_tilde, sessions_dir, Result, TmuxkitError};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tmux: TmuxSettings,
    pub sessions: SessionStoreSettings,
}

/// Which tmux to run and which server to address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmuxSettings {
    /// Explicit tmux binary; looked up on PATH when unset
    pub binary: Option<PathBuf>,
    pub socket_name: Option<String>,
    pub socket_path: Option<PathBuf>,
}

/// Where session files live and how their windows are numbered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStoreSettings {
    pub directory: Option<PathBuf>,
    /// tmux `base-index` option of the target server
    pub base_index: u32,
}

impl AppConfig {
    /// Directory `save` writes to when no path is given
    pub fn sessions_dir(&self) -> PathBuf {
        match &self.sessions.directory {
            Some(dir) => expand_tilde(dir),
            None => sessions_dir(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from default location
    pub fn load() -> Result<AppConfig> {
        let path = config_file();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(AppConfig::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| TmuxkitError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration from string
    pub fn parse(content: &str, path: &Path) -> Result<AppConfig> {
        toml::from_str(content).map_err(|e| TmuxkitError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<()> {
        if config.tmux.socket_name.as_deref() == Some("") {
            return Err(TmuxkitError::config("tmux.socket_name must not be empty"));
        }

        if config
            .tmux
            .binary
            .as_ref()
            .is_some_and(|binary| binary.as_os_str().is_empty())
        {
            return Err(TmuxkitError::config("tmux.binary must not be empty"));
        }

        if config
            .tmux
            .socket_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(TmuxkitError::config("tmux.socket_path must not be empty"));
        }

        Ok(())
    }

    /// Load from `path` if given, else the default location, and validate
    pub fn load_and_validate(path: Option<&Path>) -> Result<AppConfig> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Self::validate(&config)?;
        Ok(config)
    }
}
