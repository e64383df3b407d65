//! `tmuxkit ls`

use std::io::{self, Write};

use tmuxkit_core::Server;
use tmuxkit_utils::Result;

pub fn ls(server: &Server) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if write_tree(server, &mut out)? == 0 {
        // tmux exits with 1 when no sessions
        return Ok(1);
    }
    Ok(0)
}

/// Print sessions, their windows and panes; returns the session count
fn write_tree(server: &Server, out: &mut impl Write) -> Result<usize> {
    let sessions = server.list_sessions()?;
    for session in &sessions {
        writeln!(out, "{} (${})", session.name(), session.id())?;
        for window in session.list_windows()? {
            let record = window.record();
            writeln!(
                out,
                "  @{} {}  {}",
                record.id,
                record.name,
                record.current_path.display()
            )?;
            for pane in window.list_panes()? {
                let active = if pane.record().active { " (active)" } else { "" };
                writeln!(out, "    {}{}", pane.target(), active)?;
            }
        }
    }
    Ok(sessions.len())
}
