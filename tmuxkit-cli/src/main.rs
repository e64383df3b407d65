//! tmuxkit: save, load and inspect tmux sessions
//!
//! Sessions are stored as YAML files describing windows, their working
//! directories and pane counts. Loading one recreates the session through
//! `tmuxkit_core::Configuration` and attaches to it.

mod cli;
mod commands;
mod config;

use std::sync::Arc;

use clap::Parser;
use cli::Cli;
use config::{AppConfig, ConfigLoader};
use tmuxkit_core::{CommandRunner, Server, SystemRunner};
use tmuxkit_utils::{expand_tilde, init_logging_with_config, LogConfig, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging_with_config(log_config(&cli)) {
        eprintln!("warning: {}", e);
    }

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

/// stderr belongs to the tmux client once `load` attaches
fn log_config(cli: &Cli) -> LogConfig {
    match (cli.command.attaches(), cli.verbose) {
        (true, true) => LogConfig {
            filter: "debug".into(),
            ..LogConfig::file()
        },
        (true, false) => LogConfig::file(),
        (false, true) => LogConfig::verbose(),
        (false, false) => LogConfig::cli(),
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = ConfigLoader::load_and_validate(cli.config.as_deref())?;
    let server = connect(&cli, &config)?;
    commands::execute(cli.command, &server, &config)
}

/// Build the server handle; command-line flags win over the settings file
fn connect(cli: &Cli, config: &AppConfig) -> Result<Server> {
    let runner: Arc<dyn CommandRunner> = match &config.tmux.binary {
        Some(binary) => Arc::new(SystemRunner::with_program(expand_tilde(binary))),
        None => Arc::new(SystemRunner::discover()?),
    };

    let mut server = Server::with_runner(runner);
    if let Some(path) = cli.socket_path.as_ref().or(config.tmux.socket_path.as_ref()) {
        server = server.socket_path(expand_tilde(path));
    }
    if let Some(name) = cli.socket_name.as_ref().or(config.tmux.socket_name.as_ref()) {
        server = server.socket_name(name.as_str());
    }
    tracing::debug!(socket = ?server.socket(), "using tmux server");
    Ok(server)
}
