//! Reading and writing YAML session files

use std::path::Path;

use tmuxkit_core::SessionSpec;
use tmuxkit_utils::{paths, Result, TmuxkitError};

/// Read a session file
pub fn read(path: &Path) -> Result<SessionSpec> {
    let content = std::fs::read_to_string(path).map_err(|e| TmuxkitError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| TmuxkitError::SessionFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a session file, creating its directory if needed
pub fn write(path: &Path, session: &SessionSpec) -> Result<()> {
    let content = serde_yaml::to_string(session).map_err(|e| TmuxkitError::SessionFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        paths::ensure_dir(parent).map_err(|e| TmuxkitError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| TmuxkitError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tmuxkit_core::{Layout, WindowSpec};

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dev.yaml");
        let session = SessionSpec::new("dev")
            .start_directory("/src")
            .window(WindowSpec::new("editor").panes(2))
            .window(WindowSpec::new("logs").layout(Layout::Tiled));

        write(&path, &session).unwrap();
        assert_eq!(read(&path).unwrap(), session);
    }

    #[test]
    fn test_read_hand_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work.yaml");
        std::fs::write(
            &path,
            "name: work\nstart_directory: /srv\nwindows:\n  - name: shell\n  - name: build\n    panes: [{}, {}]\n",
        )
        .unwrap();

        let session = read(&path).unwrap();
        assert_eq!(session.name, "work");
        assert_eq!(session.windows.len(), 2);
        assert_eq!(session.windows[1].panes.len(), 2);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, TmuxkitError::FileRead { .. }));
    }

    #[test]
    fn test_read_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "windows: [name: x\n").unwrap();
        let err = read(&path).unwrap_err();
        assert!(matches!(err, TmuxkitError::SessionFile { .. }));
    }

    #[test]
    fn test_read_unknown_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.yaml");
        std::fs::write(&path, "name: x\nwindows:\n  - name: w\n    layout: spiral\n").unwrap();
        assert!(read(&path).is_err());
    }
}
