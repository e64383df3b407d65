//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Save and restore tmux sessions
#[derive(Parser, Debug)]
#[command(name = "tmuxkit")]
#[command(about = "Save, load and inspect tmux sessions")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to $XDG_CONFIG_HOME/tmuxkit/config.toml)
    #[arg(long, env = "TMUXKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// tmux socket name, as with `tmux -L`
    #[arg(short = 'L', long)]
    pub socket_name: Option<String>,

    /// tmux socket path, as with `tmux -S`
    #[arg(short = 'S', long)]
    pub socket_path: Option<PathBuf>,

    /// Log every tmux command (to the log file when `load` attaches)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the attached session to a YAML file
    Save {
        /// Output file (defaults to <sessions dir>/<session>.yaml)
        path: Option<PathBuf>,

        /// Session name stored in the file, also used for the default file name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Create a session from a YAML file and attach to it
    Load {
        /// Session file
        path: PathBuf,

        /// Leave the session detached
        #[arg(long)]
        no_attach: bool,
    },

    /// List sessions, windows and panes
    #[command(alias = "list")]
    Ls,

    /// Kill a session
    Kill {
        /// Session name
        name: String,
    },
}

impl Command {
    /// Whether the run ends with a tmux client taking over the terminal
    pub fn attaches(&self) -> bool {
        matches!(self, Command::Load { no_attach: false, .. })
    }
}
