//! Desired-state description of sessions, windows and panes
//!
//! These are inputs for [`Configuration`](crate::Configuration). They carry
//! no tmux ids; live state comes back as records from the listing
//! operations instead.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// A session to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_directory: Option<PathBuf>,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

impl SessionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_directory: None,
            windows: Vec::new(),
        }
    }

    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    pub fn window(mut self, window: WindowSpec) -> Self {
        self.windows.push(window);
        self
    }

    pub fn add_window(&mut self, window: WindowSpec) {
        self.windows.push(window);
    }

    /// Directory a window of this session starts in
    pub fn window_directory<'a>(&'a self, window: &'a WindowSpec) -> Option<&'a Path> {
        window
            .start_directory
            .as_deref()
            .or(self.start_directory.as_deref())
    }
}

/// A window to create inside a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Window index; derived from the position in the session when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Panes in creation order; the first one is created with the window
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub panes: Vec<PaneSpec>,
}

impl WindowSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            index: None,
            name: name.into(),
            start_directory: None,
            layout: None,
            panes: Vec::new(),
        }
    }

    pub fn index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn pane(mut self, pane: PaneSpec) -> Self {
        self.panes.push(pane);
        self
    }

    /// Append `count` panes that inherit the window directory
    pub fn panes(mut self, count: usize) -> Self {
        self.panes
            .extend(std::iter::repeat(PaneSpec::default()).take(count));
        self
    }

    pub fn add_pane(&mut self, pane: PaneSpec) {
        self.panes.push(pane);
    }

    /// Panes that need a `split-window`, i.e. all but the first
    pub fn split_panes(&self) -> &[PaneSpec] {
        self.panes.get(1..).unwrap_or(&[])
    }
}

/// A pane to create inside a window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSpec {
    /// Overrides the window directory for this pane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_directory: Option<PathBuf>,
}

impl PaneSpec {
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            start_directory: Some(dir.into()),
        }
    }
}
