//! Server handle: entry point for talking to one tmux server

use std::path::PathBuf;
use std::sync::Arc;

use tmuxkit_utils::{Result, TmuxkitError};

use crate::command::{exact_session, Socket, TmuxCommand};
use crate::naming::check_session_name;
use crate::parser::{self, PaneRecord, SESSION_FORMAT};
use crate::runner::{CommandRunner, SystemRunner, Tmux};
use crate::session::Session;
use crate::spec::SessionSpec;

/// Options for `new-session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub name: String,
    /// Name of the window the session starts with
    pub window_name: Option<String>,
    pub start_directory: Option<PathBuf>,
    /// Create without attaching a client (`-d`)
    pub detached: bool,
}

impl NewSession {
    /// Detached session with tmux's default first window
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window_name: None,
            start_directory: None,
            detached: true,
        }
    }

    pub fn window_name(mut self, name: impl Into<String>) -> Self {
        self.window_name = Some(name.into());
        self
    }

    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    pub fn detached(mut self, detached: bool) -> Self {
        self.detached = detached;
        self
    }

    pub(crate) fn command(&self) -> TmuxCommand {
        let mut cmd = TmuxCommand::new("new-session").flag_if(self.detached, "-d");
        if let Some(window) = &self.window_name {
            cmd = cmd.opt("-n", window.as_str());
        }
        cmd.opt("-s", self.name.as_str())
            .start_directory(self.start_directory.as_deref())
    }
}

/// A tmux server, selected by socket path and/or socket name
///
/// Cloning is cheap; clones share the command runner.
#[derive(Debug, Clone)]
pub struct Server {
    tmux: Tmux,
    sessions: Vec<SessionSpec>,
}

impl Default for Server {
    fn default() -> Self {
        Self::new()
    }
}

impl Server {
    /// The default server, driven through the `tmux` binary on `PATH`
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemRunner::new()))
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            tmux: Tmux::new(runner, Socket::default()),
            sessions: Vec::new(),
        }
    }

    /// Address the server listening on this socket path (`-S`)
    pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tmux.socket_mut().path = Some(path.into());
        self
    }

    /// Address the server with this socket name (`-L`)
    pub fn socket_name(mut self, name: impl Into<String>) -> Self {
        self.tmux.socket_mut().name = Some(name.into());
        self
    }

    pub fn socket(&self) -> &Socket {
        self.tmux.socket()
    }

    pub(crate) fn tmux(&self) -> &Tmux {
        &self.tmux
    }

    /// Record a session in this server's desired state
    ///
    /// Nothing is sent to tmux.
    pub fn add_session(&mut self, session: SessionSpec) {
        self.sessions.push(session);
    }

    /// Sessions added with [`add_session`](Self::add_session)
    pub fn sessions(&self) -> &[SessionSpec] {
        &self.sessions
    }

    /// List live sessions
    ///
    /// A server that is not running has no sessions.
    pub fn list_sessions(&self) -> Result<Vec<Session>> {
        let cmd = TmuxCommand::new("list-sessions").format(SESSION_FORMAT);
        let output = self.tmux.output(&cmd)?;
        if output.is_missing_session() {
            return Ok(Vec::new());
        }
        let stdout = output.into_stdout(&cmd)?;
        Ok(parser::parse_sessions(&stdout)?
            .into_iter()
            .map(|record| Session::new(self.tmux.clone(), record))
            .collect())
    }

    /// Find a live session by exact name
    pub fn find_session(&self, name: &str) -> Result<Option<Session>> {
        Ok(self
            .list_sessions()?
            .into_iter()
            .find(|session| session.name() == name))
    }

    /// Whether a session with exactly this name exists
    pub fn has_session(&self, name: &str) -> Result<bool> {
        check_session_name(name)?;
        let cmd = TmuxCommand::new("has-session").target(exact_session(name));
        let output = self.tmux.output(&cmd)?;
        if output.is_success() {
            Ok(true)
        } else if output.is_missing_session() {
            Ok(false)
        } else {
            Err(TmuxkitError::command_failed(
                cmd.subcommand(),
                output.code,
                output.stderr.trim_end(),
            ))
        }
    }

    /// Create a detached session
    ///
    /// Fails with [`TmuxkitError::SessionExists`] when the name is taken.
    pub fn new_session(&self, name: &str) -> Result<Session> {
        self.new_session_with(&NewSession::new(name))
    }

    /// Create a session with explicit options
    pub fn new_session_with(&self, options: &NewSession) -> Result<Session> {
        check_session_name(&options.name)?;
        if self.has_session(&options.name)? {
            return Err(TmuxkitError::SessionExists(options.name.clone()));
        }

        let cmd = options.command().arg("-P").format(SESSION_FORMAT);
        let stdout = self.tmux.run(&cmd)?;
        let record = parser::expect_one(
            cmd.subcommand(),
            &stdout,
            parser::parse_sessions(&stdout)?,
        )?;
        tracing::info!("created session {} (${})", record.name, record.id);
        Ok(Session::new(self.tmux.clone(), record))
    }

    /// Kill the session with exactly this name
    pub fn kill_session(&self, name: &str) -> Result<()> {
        // kill-session without a target kills the attached session
        check_session_name(name)?;
        let cmd = TmuxCommand::new("kill-session").target(exact_session(name));
        self.tmux.run(&cmd)?;
        tracing::info!("killed session {}", name);
        Ok(())
    }

    /// List every pane on the server
    pub fn list_panes(&self) -> Result<Vec<PaneRecord>> {
        let cmd = TmuxCommand::new("list-panes")
            .arg("-a")
            .format(parser::PANE_FORMAT);
        parser::parse_panes(&self.tmux.run(&cmd)?)
    }

    /// Name of the session the current client is attached to
    pub fn attached_session_name(&self) -> Result<String> {
        let cmd = TmuxCommand::new("display-message").opt("-p", "#S");
        let mut name = self.tmux.run(&cmd)?;
        if name.ends_with('\n') {
            name.pop();
        }
        Ok(name)
    }
}
