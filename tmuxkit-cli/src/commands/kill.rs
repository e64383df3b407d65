//! `tmuxkit kill`

use tmuxkit_core::Server;
use tmuxkit_utils::Result;

pub fn kill(server: &Server, name: &str) -> Result<i32> {
    if !server.has_session(name)? {
        eprintln!("session not found: {}", name);
        return Ok(1);
    }
    server.kill_session(name)?;
    Ok(0)
}
