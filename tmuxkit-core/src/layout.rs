//! Preset window layouts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tmuxkit_utils::TmuxkitError;

/// A tmux layout preset, passed verbatim to `select-layout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    EvenHorizontal,
    EvenVertical,
    MainHorizontal,
    MainVertical,
    Tiled,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Layout::EvenHorizontal,
        Layout::EvenVertical,
        Layout::MainHorizontal,
        Layout::MainVertical,
        Layout::Tiled,
    ];

    /// The token tmux expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::EvenHorizontal => "even-horizontal",
            Layout::EvenVertical => "even-vertical",
            Layout::MainHorizontal => "main-horizontal",
            Layout::MainVertical => "main-vertical",
            Layout::Tiled => "tiled",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = TmuxkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| TmuxkitError::config(format!("Unknown layout: {:?}", s)))
    }
}
