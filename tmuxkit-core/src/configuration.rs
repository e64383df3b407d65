//! Applying a declarative set of sessions to a server
//!
//! [`Configuration::apply`] validates everything up front, then issues one
//! command at a time: the session (unless it already exists), each window
//! with `new-window -k`, one `split-window` per extra pane and finally the
//! layout. The first failing command aborts the run. Nothing created before
//! the failure is rolled back.

use tmuxkit_utils::{Result, TmuxkitError};

use crate::command::{window_target, TmuxCommand};
use crate::naming::check_session_name;
use crate::server::{NewSession, Server};
use crate::spec::{SessionSpec, WindowSpec};

/// Desired sessions for one server
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub server: Option<Server>,
    pub sessions: Vec<SessionSpec>,
    /// Session created attached instead of detached
    ///
    /// An attached `new-session` needs the caller's terminal. Under a runner
    /// that captures output, such as `SystemRunner`, tmux has no terminal and
    /// the command fails with "open terminal failed".
    pub active_session: Option<String>,
    /// Index of a session's first window when windows carry no explicit index
    pub base_index: u32,
}

impl Configuration {
    pub fn new(server: Server) -> Self {
        Self {
            server: Some(server),
            ..Self::default()
        }
    }

    /// Configuration for the sessions recorded on `server`
    pub fn for_server(server: Server) -> Self {
        let sessions = server.sessions().to_vec();
        Self {
            sessions,
            ..Self::new(server)
        }
    }

    pub fn session(mut self, session: SessionSpec) -> Self {
        self.sessions.push(session);
        self
    }

    pub fn active_session(mut self, name: impl Into<String>) -> Self {
        self.active_session = Some(name.into());
        self
    }

    pub fn base_index(mut self, index: u32) -> Self {
        self.base_index = index;
        self
    }

    /// Check the configuration without talking to tmux
    pub fn validate(&self) -> Result<&Server> {
        let server = self.server.as_ref().ok_or(TmuxkitError::ServerNotSet)?;
        if self.sessions.is_empty() {
            return Err(TmuxkitError::NoSessions);
        }
        for session in &self.sessions {
            check_session_name(&session.name)?;
            if session.windows.is_empty() {
                return Err(TmuxkitError::NoWindows {
                    session: session.name.clone(),
                });
            }
            for (position, window) in session.windows.iter().enumerate() {
                self.window_index(position, window)?;
            }
        }
        Ok(server)
    }

    /// Create every configured session, window and pane
    pub fn apply(&self) -> Result<()> {
        let server = self.validate()?;
        tracing::info!(
            sessions = self.sessions.len(),
            "applying configuration"
        );

        for session in &self.sessions {
            self.apply_session(server, session)?;
        }

        tracing::info!("configuration applied");
        Ok(())
    }

    fn is_active(&self, session: &SessionSpec) -> bool {
        self.active_session.as_deref() == Some(session.name.as_str())
    }

    fn window_index(&self, position: usize, window: &WindowSpec) -> Result<u32> {
        if let Some(index) = window.index {
            return Ok(index);
        }
        u32::try_from(position)
            .ok()
            .and_then(|position| self.base_index.checked_add(position))
            .ok_or_else(|| {
                TmuxkitError::config(format!(
                    "window {} has no index: base index {} + position {} overflows",
                    window.name, self.base_index, position
                ))
            })
    }

    fn apply_session(&self, server: &Server, session: &SessionSpec) -> Result<()> {
        let first = session.windows.first().ok_or_else(|| TmuxkitError::NoWindows {
            session: session.name.clone(),
        })?;

        if server.has_session(&session.name)? {
            tracing::warn!("session {} already exists, reusing it", session.name);
        } else {
            let mut options = NewSession::new(session.name.as_str())
                .window_name(first.name.as_str())
                .detached(!self.is_active(session));
            options.start_directory = session.start_directory.clone();
            server.tmux().run(&options.command())?;
            tracing::info!("created session {}", session.name);
        }

        for (position, window) in session.windows.iter().enumerate() {
            let index = self.window_index(position, window)?;
            self.apply_window(server, session, window, index)?;
        }
        Ok(())
    }

    fn apply_window(
        &self,
        server: &Server,
        session: &SessionSpec,
        window: &WindowSpec,
        index: u32,
    ) -> Result<()> {
        let tmux = server.tmux();
        let target = window_target(&session.name, index);
        let dir = session.window_directory(window);

        tmux.run(
            &TmuxCommand::new("new-window")
                .arg("-k")
                .opt("-n", window.name.as_str())
                .target(target.as_str())
                .start_directory(dir),
        )?;

        for pane in window.split_panes() {
            tmux.run(
                &TmuxCommand::new("split-window")
                    .target(target.as_str())
                    .start_directory(pane.start_directory.as_deref().or(dir)),
            )?;
        }

        if let Some(layout) = window.layout {
            tmux.run(
                &TmuxCommand::new("select-layout")
                    .target(target.as_str())
                    .arg(layout.as_str()),
            )?;
        }

        tracing::info!(
            panes = window.panes.len().max(1),
            "created window {} ({})",
            window.name,
            target
        );
        Ok(())
    }
}
