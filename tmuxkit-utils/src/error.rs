//! Error types for tmuxkit
//!
//! Provides a unified error type used across all tmuxkit crates.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Main error type for tmuxkit operations
#[derive(Debug, thiserror::Error)]
pub enum TmuxkitError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Validation Errors ===

    #[error("Bad session name: {0:?}")]
    InvalidSessionName(String),

    #[error("Session {session} doesn't contain any windows")]
    NoWindows { session: String },

    #[error("Server was not initialized")]
    ServerNotSet,

    #[error("At least one session is required to apply a configuration")]
    NoSessions,

    #[error("Session already exists: {0}")]
    SessionExists(String),

    // === Execution Errors ===

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("tmux {command} failed{}: {stderr}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to exec tmux {command}: {source}")]
    Exec {
        command: String,
        source: std::io::Error,
    },

    // === Parse Errors ===

    #[error("Invalid {field} value {value:?}: {source}")]
    ParseInt {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("Unexpected output from tmux {command}: {output:?}")]
    UnexpectedOutput { command: String, output: String },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Invalid session file {path}: {message}")]
    SessionFile { path: PathBuf, message: String },

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TmuxkitError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a command failure for the given subcommand
    pub fn command_failed(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Check if this error was raised before any tmux command ran
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSessionName(_)
                | Self::NoWindows { .. }
                | Self::ServerNotSet
                | Self::NoSessions
        )
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit status {})", code),
        None => String::new(),
    }
}

/// Result type alias using TmuxkitError
pub type Result<T> = std::result::Result<T, TmuxkitError>;
