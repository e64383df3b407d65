//! tmuxkit-core: a typed control layer over the tmux command line
//!
//! This crate provides:
//! - The process boundary ([`CommandRunner`], [`SystemRunner`])
//! - Session naming rules ([`validate_session_name`])
//! - Parsing of `-F` formatted listing output into records ([`parser`])
//! - Handles for live objects ([`Server`], [`Session`], [`Window`], [`Pane`])
//! - Desired-state specs and [`Configuration::apply`]
//!
//! Every operation runs one tmux command and blocks until it exits.

pub mod command;
pub mod configuration;
pub mod layout;
pub mod naming;
pub mod pane;
pub mod parser;
pub mod runner;
pub mod server;
pub mod session;
pub mod spec;
pub mod window;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use command::{Socket, TmuxCommand};
pub use configuration::Configuration;
pub use layout::Layout;
pub use naming::{check_session_name, validate_session_name};
pub use pane::Pane;
pub use parser::{PaneRecord, SessionRecord, WindowRecord};
pub use runner::{CommandOutput, CommandRunner, SystemRunner, Tmux};
pub use server::{NewSession, Server};
pub use session::Session;
pub use spec::{PaneSpec, SessionSpec, WindowSpec};
pub use window::Window;

pub use tmuxkit_utils::{Result, TmuxkitError};
