//! Live session handle

use std::convert::Infallible;

use tmuxkit_utils::Result;

use crate::command::{exact_session, TmuxCommand};
use crate::parser::{self, PaneRecord, SessionRecord, PANE_FORMAT, WINDOW_FORMAT};
use crate::runner::Tmux;
use crate::window::Window;

/// A session that exists on the server
#[derive(Debug, Clone)]
pub struct Session {
    tmux: Tmux,
    record: SessionRecord,
}

impl Session {
    pub(crate) fn new(tmux: Tmux, record: SessionRecord) -> Self {
        Self { tmux, record }
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    fn target(&self) -> String {
        exact_session(&self.record.name)
    }

    /// List the session's windows in index order
    pub fn list_windows(&self) -> Result<Vec<Window>> {
        let cmd = TmuxCommand::new("list-windows")
            .target(self.target())
            .format(WINDOW_FORMAT);
        let stdout = self.tmux.run(&cmd)?;
        Ok(parser::parse_windows(&stdout, &self.record)?
            .into_iter()
            .map(|record| Window::new(self.tmux.clone(), record))
            .collect())
    }

    /// Create a window at the next free index without switching to it
    pub fn new_window(&self, name: &str) -> Result<Window> {
        let cmd = TmuxCommand::new("new-window")
            .arg("-d")
            .target(format!("{}:", self.target()))
            .opt("-n", name)
            .arg("-P")
            .format(WINDOW_FORMAT);
        let stdout = self.tmux.run(&cmd)?;
        let record = parser::expect_one(
            cmd.subcommand(),
            &stdout,
            parser::parse_windows(&stdout, &self.record)?,
        )?;
        tracing::debug!("created window @{} in {}", record.id, self.name());
        Ok(Window::new(self.tmux.clone(), record))
    }

    /// List the panes of every window in the session
    pub fn list_panes(&self) -> Result<Vec<PaneRecord>> {
        let cmd = TmuxCommand::new("list-panes")
            .arg("-s")
            .target(self.target())
            .format(PANE_FORMAT);
        parser::parse_panes(&self.tmux.run(&cmd)?)
    }

    /// Attach the terminal to this session
    ///
    /// From inside a tmux client this switches that client instead, so
    /// sessions are never nested. Replaces the current process and only
    /// returns on failure.
    pub fn attach(&self) -> Result<Infallible> {
        let subcommand = if self.tmux.inside_client() {
            "switch-client"
        } else {
            "attach-session"
        };
        self.tmux
            .exec(&TmuxCommand::new(subcommand).target(self.target()))
    }

    /// Detach every client attached to this session
    ///
    /// Replaces the current process and only returns on failure.
    pub fn detach(&self) -> Result<Infallible> {
        self.tmux
            .exec(&TmuxCommand::new("detach-client").opt("-s", self.target()))
    }

    /// Kill this session
    pub fn kill(self) -> Result<()> {
        self.tmux
            .run(&TmuxCommand::new("kill-session").target(self.target()))?;
        Ok(())
    }
}
