//! `tmuxkit load`

use std::path::Path;

use tmuxkit_core::{Configuration, Server};
use tmuxkit_utils::{expand_tilde, Result};

use super::session_file;
use crate::config::AppConfig;

pub fn load(server: &Server, config: &AppConfig, path: &Path, no_attach: bool) -> Result<i32> {
    let spec = session_file::read(&expand_tilde(path))?;
    let name = spec.name.clone();

    Configuration::new(server.clone())
        .base_index(config.sessions.base_index)
        .session(spec)
        .apply()?;

    if no_attach {
        println!("Session {} is ready", name);
        return Ok(0);
    }

    let Some(session) = server.find_session(&name)? else {
        eprintln!("session not found: {}", name);
        return Ok(1);
    };
    // only comes back if tmux could not be started
    match session.attach()? {}
}
