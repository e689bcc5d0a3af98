//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "articviewer", "artic-viewer").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/artic-viewer/` or `$XDG_CONFIG_HOME/artic-viewer/`
/// - **macOS**: `~/Library/Application Support/org.articviewer.artic-viewer/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\articviewer\artic-viewer\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (local storage blob, log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/artic-viewer/`
/// - **macOS**: `~/Library/Application Support/org.articviewer.artic-viewer/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\articviewer\artic-viewer\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Write a file atomically by renaming a sibling temp file over it
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("blob.json");

        write_atomic(&path, b"first").expect("write");
        write_atomic(&path, b"second").expect("rewrite");

        assert_eq!(fs::read_to_string(&path).expect("read"), "second");
        assert!(!dir.path().join("nested").join("blob.json.tmp").exists());
    }
}
