//! Session naming rules
//!
//! tmux uses `:` and `.` to separate session, window and pane in target
//! addresses (`session:window.pane`), so a session name may contain
//! neither.

use tmuxkit_utils::{Result, TmuxkitError};

pub fn validate_session_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c| c == ':' || c == '.')
}

/// Like [`validate_session_name`], as a `Result`
pub fn check_session_name(name: &str) -> Result<()> {
    if validate_session_name(name) {
        Ok(())
    } else {
        Err(TmuxkitError::InvalidSessionName(name.to_string()))
    }
}
