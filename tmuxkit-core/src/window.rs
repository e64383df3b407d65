//! Live window handle

use std::path::Path;

use tmuxkit_utils::Result;

use crate::command::TmuxCommand;
use crate::layout::Layout;
use crate::parser::{self, PaneRecord, WindowRecord, PANE_FORMAT};
use crate::pane::Pane;
use crate::runner::Tmux;

/// A window that exists on the server
#[derive(Debug, Clone)]
pub struct Window {
    tmux: Tmux,
    record: WindowRecord,
}

impl Window {
    pub(crate) fn new(tmux: Tmux, record: WindowRecord) -> Self {
        Self { tmux, record }
    }

    pub fn record(&self) -> &WindowRecord {
        &self.record
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Target string `@N`
    pub fn target(&self) -> String {
        format!("@{}", self.record.id)
    }

    /// List the window's panes
    pub fn list_panes(&self) -> Result<Vec<Pane>> {
        let cmd = TmuxCommand::new("list-panes")
            .target(self.target())
            .format(PANE_FORMAT);
        Ok(parser::parse_panes(&self.tmux.run(&cmd)?)?
            .into_iter()
            .map(|record| Pane::new(self.tmux.clone(), record))
            .collect())
    }

    /// Split the active pane, starting the new one in the same directory
    pub fn split(&self) -> Result<Pane> {
        self.split_with(None)
    }

    /// Split the active pane, starting the new one in `dir` when given
    pub fn split_with(&self, dir: Option<&Path>) -> Result<Pane> {
        let cmd = TmuxCommand::new("split-window")
            .target(self.target())
            .start_directory(dir)
            .arg("-P")
            .format(PANE_FORMAT);
        let stdout = self.tmux.run(&cmd)?;
        let record: PaneRecord =
            parser::expect_one(cmd.subcommand(), &stdout, parser::parse_panes(&stdout)?)?;
        Ok(Pane::new(self.tmux.clone(), record))
    }

    /// Arrange the panes with a preset layout
    pub fn select_layout(&self, layout: Layout) -> Result<()> {
        let cmd = TmuxCommand::new("select-layout")
            .target(self.target())
            .arg(layout.as_str());
        self.tmux.run(&cmd)?;
        Ok(())
    }
}
