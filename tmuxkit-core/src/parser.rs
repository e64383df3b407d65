//! Record parser for tmux listing output
//!
//! Listing commands are sent a `-F` format joining placeholders with `:`.
//! Each output line is matched against one anchored pattern per record
//! kind. Lines that do not match are skipped; a matching line whose
//! numeric field does not fit the id type aborts the whole listing.
//!
//! The format strings and the patterns below must stay in the same field
//! order.

use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use tmuxkit_utils::{Result, TmuxkitError};

/// `-F` format for session records
pub const SESSION_FORMAT: &str = "#{session_id}:#{session_name}";

/// `-F` format for window records
pub const WINDOW_FORMAT: &str = "#{window_id}:#{window_name}:#{pane_current_path}";

/// `-F` format for pane records
pub const PANE_FORMAT: &str = "#{session_id}:#{session_name}:#{window_id}:#{window_name}:#{window_index}:#{pane_id}:#{pane_active}";

lazy_static! {
    static ref SESSION_REGEX: Regex = Regex::new(r"^\$([0-9]+):(.+)$").unwrap();
    static ref WINDOW_REGEX: Regex = Regex::new(r"^@([0-9]+):(.+):(.+)$").unwrap();
    // the active token is left open so a non 0/1 value still yields a record
    static ref PANE_REGEX: Regex =
        Regex::new(r"^\$([0-9]+):(.+):@([0-9]+):(.+):([0-9]+):%([0-9]+):([^:]*)$").unwrap();
}

/// A live session as reported by tmux
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Numeric part of `$N`
    pub id: u32,
    pub name: String,
}

/// A live window as reported by tmux
///
/// `session_id` and `session_name` are copied from the session the
/// listing was scoped to and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    /// Numeric part of `@N`
    pub id: u32,
    pub name: String,
    /// Working directory of the window's active pane
    pub current_path: PathBuf,
    pub session_id: u32,
    pub session_name: String,
}

/// A live pane as reported by tmux
///
/// The session and window fields are a snapshot taken at listing time.
/// They go stale if the pane is moved or its window renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneRecord {
    /// Numeric part of `%N`, unique across the server
    pub id: u32,
    pub session_id: u32,
    pub session_name: String,
    pub window_id: u32,
    pub window_name: String,
    pub window_index: u32,
    /// Whether this is the focused pane of its window
    pub active: bool,
}

impl PaneRecord {
    /// Target string `%N`
    pub fn target(&self) -> String {
        format!("%{}", self.id)
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<u32> {
    value.parse().map_err(|e| TmuxkitError::ParseInt {
        field,
        value: value.to_string(),
        source: e,
    })
}

fn parse_lines<T>(
    output: &str,
    regex: &Regex,
    mut build: impl FnMut(&Captures<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for line in output.lines() {
        if let Some(caps) = regex.captures(line) {
            records.push(build(&caps)?);
        }
    }
    Ok(records)
}

/// Parse a single `$id:name` line
///
/// Returns `Ok(None)` when the line is not a session record.
pub fn parse_session_line(line: &str) -> Result<Option<SessionRecord>> {
    match SESSION_REGEX.captures(line) {
        Some(caps) => Ok(Some(session_from(&caps)?)),
        None => Ok(None),
    }
}

fn session_from(caps: &Captures<'_>) -> Result<SessionRecord> {
    Ok(SessionRecord {
        id: parse_id("session id", &caps[1])?,
        name: caps[2].to_string(),
    })
}

/// Parse `list-sessions` output produced with [`SESSION_FORMAT`]
pub fn parse_sessions(output: &str) -> Result<Vec<SessionRecord>> {
    parse_lines(output, &SESSION_REGEX, session_from)
}

/// Parse `list-windows` output produced with [`WINDOW_FORMAT`]
pub fn parse_windows(output: &str, session: &SessionRecord) -> Result<Vec<WindowRecord>> {
    parse_lines(output, &WINDOW_REGEX, |caps| {
        Ok(WindowRecord {
            id: parse_id("window id", &caps[1])?,
            name: caps[2].to_string(),
            current_path: PathBuf::from(&caps[3]),
            session_id: session.id,
            session_name: session.name.clone(),
        })
    })
}

/// Parse `list-panes` output produced with [`PANE_FORMAT`]
///
/// The active flag is true only for the literal token `1`. Any other
/// token, including an empty one, reads as inactive.
pub fn parse_panes(output: &str) -> Result<Vec<PaneRecord>> {
    parse_lines(output, &PANE_REGEX, |caps| {
        Ok(PaneRecord {
            session_id: parse_id("session id", &caps[1])?,
            session_name: caps[2].to_string(),
            window_id: parse_id("window id", &caps[3])?,
            window_name: caps[4].to_string(),
            window_index: parse_id("window index", &caps[5])?,
            id: parse_id("pane id", &caps[6])?,
            active: &caps[7] == "1",
        })
    })
}

/// Take the single record a creation command printed with `-P -F`
pub(crate) fn expect_one<T>(command: &str, output: &str, records: Vec<T>) -> Result<T> {
    records
        .into_iter()
        .next()
        .ok_or_else(|| TmuxkitError::UnexpectedOutput {
            command: command.to_string(),
            output: output.to_string(),
        })
}
