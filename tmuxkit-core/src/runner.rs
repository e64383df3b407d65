//! Process boundary: running the tmux binary
//!
//! [`CommandRunner`] is the seam between the typed layer and the external
//! tool. [`SystemRunner`] spawns the real binary; tests substitute a
//! scripted implementation.

use std::convert::Infallible;
use std::fmt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use tmuxkit_utils::{Result, TmuxkitError};

use crate::command::{Socket, TmuxCommand};

/// Environment variable tmux sets inside every client
pub const TMUX_ENV: &str = "TMUX";

/// Captured result of one tmux invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Successful run with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    /// Failed run with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Whether a failed run only reports that the addressed session does not exist
    ///
    /// A server that is not running has no sessions either. tmux has no
    /// structured signal for this, so the stderr text is the only source.
    pub fn is_missing_session(&self) -> bool {
        if self.is_success() {
            return false;
        }
        let stderr = self.stderr.to_ascii_lowercase();
        stderr.contains("can't find session")
            || stderr.contains("no server running")
            || (stderr.contains("error connecting to") && stderr.contains("no such file"))
    }

    /// Stdout of a successful run, or the failure as an error
    pub fn into_stdout(self, command: &TmuxCommand) -> Result<String> {
        if self.is_success() {
            Ok(self.stdout)
        } else {
            Err(TmuxkitError::command_failed(
                command.subcommand(),
                self.code,
                self.stderr.trim_end(),
            ))
        }
    }
}

/// Executes tmux subcommands against a server
pub trait CommandRunner: Send + Sync + fmt::Debug {
    /// Run a command to completion and capture its output
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`]; only a
    /// failure to launch the binary is an `Err`.
    fn run(&self, socket: &Socket, command: &TmuxCommand) -> Result<CommandOutput>;

    /// Replace the current process with tmux running `command`
    ///
    /// Never returns on success.
    fn exec(&self, socket: &Socket, command: &TmuxCommand) -> Result<Infallible>;

    /// Whether the calling process already runs inside a tmux client
    fn inside_client(&self) -> bool {
        std::env::var_os(TMUX_ENV).is_some_and(|value| !value.is_empty())
    }
}

/// Runner that spawns the tmux binary
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: PathBuf,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemRunner {
    /// Runner resolving `tmux` through `PATH` at spawn time
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("tmux"),
        }
    }

    /// Runner for an explicit tmux binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Look tmux up on `PATH` now, failing early when it is missing
    pub fn discover() -> Result<Self> {
        let program = which::which("tmux").map_err(|e| TmuxkitError::Launch {
            program: "tmux".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
        })?;
        tracing::debug!("using tmux at {}", program.display());
        Ok(Self { program })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, socket: &Socket, command: &TmuxCommand) -> Command {
        let mut process = Command::new(&self.program);
        process.args(command.argv(socket));
        process
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, socket: &Socket, command: &TmuxCommand) -> Result<CommandOutput> {
        let output = self
            .command(socket, command)
            .output()
            .map_err(|e| TmuxkitError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source: e,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }

    fn exec(&self, socket: &Socket, command: &TmuxCommand) -> Result<Infallible> {
        // exec only returns if it failed
        let err = self.command(socket, command).exec();
        Err(TmuxkitError::Exec {
            command: command.subcommand().to_string(),
            source: err,
        })
    }
}

/// A runner bound to one tmux server
#[derive(Debug, Clone)]
pub struct Tmux {
    runner: Arc<dyn CommandRunner>,
    socket: Socket,
}

impl Tmux {
    pub fn new(runner: Arc<dyn CommandRunner>, socket: Socket) -> Self {
        Self { runner, socket }
    }

    pub fn socket(&self) -> &Socket {
        &self.socket
    }

    pub(crate) fn socket_mut(&mut self) -> &mut Socket {
        &mut self.socket
    }

    /// Run a command and return its raw output, whatever the exit status
    pub fn output(&self, command: &TmuxCommand) -> Result<CommandOutput> {
        tracing::debug!(socket = ?self.socket, "tmux {}", command);
        let output = self.runner.run(&self.socket, command)?;
        if !output.is_success() {
            tracing::debug!(
                code = ?output.code,
                "tmux {} failed: {}",
                command.subcommand(),
                output.stderr.trim_end()
            );
        }
        Ok(output)
    }

    /// Run a command that must succeed and return its stdout
    pub fn run(&self, command: &TmuxCommand) -> Result<String> {
        self.output(command)?.into_stdout(command)
    }

    /// Hand the process over to tmux
    pub fn exec(&self, command: &TmuxCommand) -> Result<Infallible> {
        tracing::debug!(socket = ?self.socket, "exec tmux {}", command);
        self.runner.exec(&self.socket, command)
    }

    pub fn inside_client(&self) -> bool {
        self.runner.inside_client()
    }
}
