//! `tmuxkit save`

use std::path::PathBuf;

use tmuxkit_core::{Server, Session, SessionSpec, WindowSpec};
use tmuxkit_utils::{expand_tilde, Result};

use super::session_file;
use crate::config::AppConfig;

pub fn save(
    server: &Server,
    config: &AppConfig,
    path: Option<PathBuf>,
    name: Option<String>,
) -> Result<i32> {
    let attached = server.attached_session_name()?;
    let Some(session) = server.find_session(&attached)? else {
        eprintln!("session not found: {}", attached);
        return Ok(1);
    };

    let spec = snapshot(&session, name.unwrap_or_else(|| attached.clone()))?;
    let path = match path {
        Some(path) => expand_tilde(path),
        None => config.sessions_dir().join(format!("{}.yaml", spec.name)),
    };

    session_file::write(&path, &spec)?;
    tracing::info!("saved session {} to {}", attached, path.display());
    println!("Saved in {}", path.display());
    Ok(0)
}

/// Describe a live session as a spec that recreates it
///
/// Captures window names, working directories and pane counts. Layouts
/// are not recorded.
fn snapshot(session: &Session, name: String) -> Result<SessionSpec> {
    let mut spec = SessionSpec::new(name);
    for window in session.list_windows()? {
        let panes = window.list_panes()?.len();
        spec.add_window(
            WindowSpec::new(window.name())
                .start_directory(window.record().current_path.clone())
                .panes(panes),
        );
    }
    Ok(spec)
}
