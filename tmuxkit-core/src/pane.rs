//! Live pane handle

use std::path::PathBuf;

use tmuxkit_utils::Result;

use crate::command::TmuxCommand;
use crate::parser::PaneRecord;
use crate::runner::Tmux;

/// A pane that exists on the server
#[derive(Debug, Clone)]
pub struct Pane {
    tmux: Tmux,
    record: PaneRecord,
}

impl Pane {
    pub(crate) fn new(tmux: Tmux, record: PaneRecord) -> Self {
        Self { tmux, record }
    }

    pub fn record(&self) -> &PaneRecord {
        &self.record
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn target(&self) -> String {
        self.record.target()
    }

    /// Working directory of the process running in the pane
    ///
    /// Exactly one trailing newline is removed; the path is not otherwise
    /// touched.
    pub fn current_path(&self) -> Result<PathBuf> {
        let cmd = TmuxCommand::new("display-message")
            .arg("-p")
            .target(self.target())
            .arg("#{pane_current_path}");
        let mut path = self.tmux.run(&cmd)?;
        if path.ends_with('\n') {
            path.pop();
        }
        Ok(PathBuf::from(path))
    }

    /// Visible contents of the pane, as printed by tmux
    pub fn capture(&self) -> Result<String> {
        let cmd = TmuxCommand::new("capture-pane")
            .target(self.target())
            .arg("-p");
        self.tmux.run(&cmd)
    }

    /// Type `command` into the pane and press Enter
    pub fn run_command(&self, command: &str) -> Result<()> {
        let cmd = TmuxCommand::new("send-keys")
            .target(self.target())
            .arg(command)
            .arg("Enter");
        self.tmux.run(&cmd)?;
        Ok(())
    }

    /// Make this the active pane of its window
    pub fn select(&self) -> Result<()> {
        self.tmux
            .run(&TmuxCommand::new("select-pane").target(self.target()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::runner::CommandOutput;
    use crate::testing::ScriptedRunner;

    fn pane() -> (Arc<ScriptedRunner>, Pane) {
        let runner = Arc::new(ScriptedRunner::new());
        let tmux = Tmux::new(runner.clone(), Default::default());
        let record = PaneRecord {
            id: 42,
            session_id: 1,
            session_name: "dev".into(),
            window_id: 3,
            window_name: "editor".into(),
            window_index: 0,
            active: true,
        };
        (runner, Pane::new(tmux, record))
    }

    #[test]
    fn test_current_path() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::success("/home/me/src\n"));
        assert_eq!(pane.current_path().unwrap(), PathBuf::from("/home/me/src"));
        assert_eq!(
            runner.commands(),
            vec![vec!["display-message", "-p", "-t", "%42", "#{pane_current_path}"]]
        );
    }

    #[test]
    fn test_current_path_strips_only_one_newline() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::success("/tmp/odd \n\n"));
        assert_eq!(pane.current_path().unwrap(), PathBuf::from("/tmp/odd \n"));
    }

    #[test]
    fn test_capture_keeps_output() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::success("$ ls\nCargo.toml\n\n"));
        assert_eq!(pane.capture().unwrap(), "$ ls\nCargo.toml\n\n");
        assert_eq!(runner.commands()[0], vec!["capture-pane", "-t", "%42", "-p"]);
    }

    #[test]
    fn test_capture_failure() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::failure(1, "can't find pane: %42\n"));
        assert!(pane.capture().is_err());
    }

    #[test]
    fn test_run_command() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::success(""));
        pane.run_command("cargo test").unwrap();
        assert_eq!(
            runner.commands(),
            vec![vec!["send-keys", "-t", "%42", "cargo test", "Enter"]]
        );
    }

    #[test]
    fn test_select() {
        let (runner, pane) = pane();
        runner.push(CommandOutput::success(""));
        pane.select().unwrap();
        assert_eq!(runner.commands(), vec![vec!["select-pane", "-t", "%42"]]);
    }
}
