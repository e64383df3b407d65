//! Argument vectors for tmux subcommands
//!
//! Every operation builds a [`TmuxCommand`] whose first token is the
//! subcommand name. Server scoping (`-S`/`-L`) lives in [`Socket`] and is
//! handed to the runner separately, which places it in front of the
//! subcommand on the real command line.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which tmux server instance a command is addressed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Socket {
    /// Explicit socket path (`-S`)
    pub path: Option<PathBuf>,
    /// Socket name under the tmux socket directory (`-L`)
    pub name: Option<String>,
}

impl Socket {
    /// Socket selected by name (`tmux -L name`)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            path: None,
            name: Some(name.into()),
        }
    }

    /// Socket selected by path (`tmux -S path`)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            name: None,
        }
    }

    /// Server-scoping flags, two tokens per flag
    pub fn global_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(path) = &self.path {
            args.push("-S".to_string());
            args.push(path.to_string_lossy().into_owned());
        }
        if let Some(name) = &self.name {
            args.push("-L".to_string());
            args.push(name.clone());
        }
        args
    }
}

/// A tmux subcommand with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxCommand {
    args: Vec<String>,
}

impl TmuxCommand {
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            args: vec![subcommand.into()],
        }
    }

    /// Append a single token
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a flag followed by its value
    pub fn opt(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Append `-t target`
    pub fn target(self, target: impl Into<String>) -> Self {
        self.opt("-t", target)
    }

    /// Append `-F format`
    pub fn format(self, format: &str) -> Self {
        self.opt("-F", format)
    }

    /// Append `-c dir` when a start directory is given
    pub fn start_directory(self, dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => self.opt("-c", dir.to_string_lossy()),
            None => self,
        }
    }

    /// Append `flag` only when `enabled`
    pub fn flag_if(self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.arg(flag)
        } else {
            self
        }
    }

    /// Subcommand name (first token)
    pub fn subcommand(&self) -> &str {
        &self.args[0]
    }

    /// All tokens, subcommand first
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector as passed to the tmux binary
    pub fn argv(&self, socket: &Socket) -> Vec<String> {
        let mut argv = socket.global_args();
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl fmt::Display for TmuxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// Target string selecting a session by exact name
///
/// tmux resolves a bare `-t name` by prefix as well, so `dev` would match
/// an existing `devel`.
pub fn exact_session(name: &str) -> String {
    format!("={}", name)
}

/// Target string `session:index`
pub fn window_target(session: &str, index: u32) -> String {
    format!("{}:{}", session, index)
}
