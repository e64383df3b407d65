//! Command implementations

mod kill;
mod load;
mod ls;
mod save;
mod session_file;

use tmuxkit_core::Server;
use tmuxkit_utils::Result;

use crate::cli::Command;
use crate::config::AppConfig;

/// Execute a CLI command, returning the process exit code
pub fn execute(command: Command, server: &Server, config: &AppConfig) -> Result<i32> {
    match command {
        Command::Save { path, name } => save::save(server, config, path, name),
        Command::Load { path, no_attach } => load::load(server, config, &path, no_attach),
        Command::Ls => ls::ls(server),
        Command::Kill { name } => kill::kill(server, &name),
    }
}
