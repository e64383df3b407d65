//! Scripted command runner for tests
//!
//! [`ScriptedRunner`] records every invocation and answers `run` calls from
//! a queue of prepared outputs. An empty queue answers with an empty
//! success, so tests only script the calls they care about.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::io;

use parking_lot::Mutex;

use tmuxkit_utils::{Result, TmuxkitError};

use crate::command::{Socket, TmuxCommand};
use crate::runner::{CommandOutput, CommandRunner};

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub socket: Socket,
    /// Subcommand and its arguments
    pub args: Vec<String>,
    /// Whether the call asked for process replacement
    pub exec: bool,
}

#[derive(Debug)]
enum Reply {
    Output(CommandOutput),
    LaunchFailure,
}

#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Invocation>>,
    inside_client: Mutex<bool>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output of the next `run`
    pub fn push(&self, output: CommandOutput) {
        self.replies.lock().push_back(Reply::Output(output));
    }

    /// Make the next `run` fail as if tmux were not installed
    pub fn push_launch_failure(&self) {
        self.replies.lock().push_back(Reply::LaunchFailure);
    }

    pub fn set_inside_client(&self, inside: bool) {
        *self.inside_client.lock() = inside;
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    /// Argument vectors of all calls, in order
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.calls.lock().iter().map(|c| c.args.clone()).collect()
    }

    /// Subcommand names of all calls, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|c| c.args[0].clone())
            .collect()
    }

    fn record(&self, socket: &Socket, command: &TmuxCommand, exec: bool) {
        self.calls.lock().push(Invocation {
            socket: socket.clone(),
            args: command.args().to_vec(),
            exec,
        });
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, socket: &Socket, command: &TmuxCommand) -> Result<CommandOutput> {
        self.record(socket, command, false);
        match self.replies.lock().pop_front() {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::LaunchFailure) => Err(TmuxkitError::Launch {
                program: "tmux".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            }),
            None => Ok(CommandOutput::success("")),
        }
    }

    fn exec(&self, socket: &Socket, command: &TmuxCommand) -> Result<Infallible> {
        self.record(socket, command, true);
        Err(TmuxkitError::Exec {
            command: command.subcommand().to_string(),
            source: io::Error::new(io::ErrorKind::Unsupported, "exec is not scripted"),
        })
    }

    fn inside_client(&self) -> bool {
        *self.inside_client.lock()
    }
}
