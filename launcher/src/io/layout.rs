//! Launcher directory resolution and the canonical paths beneath it.
//!
//! Every path the launcher touches is joined onto the directory holding the
//! executable. The caller's working directory is never consulted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::config::CONFIG_FILE;

/// Data file whose existence gates the launch, relative to the launcher directory.
pub const DATA_FILE: &str = "data/aws_finops_data.json";

/// All canonical paths for a launcher directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub data_path: PathBuf,
}

impl LauncherPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE),
            data_path: root.join(DATA_FILE),
            root,
        }
    }

    /// Whether the data file is present.
    ///
    /// Plain existence: a directory at the data path counts as present.
    pub fn data_present(&self) -> bool {
        self.data_path.exists()
    }
}

/// Resolve the directory containing the running launcher executable.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("resolve launcher executable")?;
    let dir = dir_of_executable(&exe)?;
    debug!(dir = %dir.display(), "resolved launcher directory");
    Ok(dir)
}

/// Canonicalize `exe` (following symlinks) and return its parent directory.
pub fn dir_of_executable(exe: &Path) -> Result<PathBuf> {
    let real = exe
        .canonicalize()
        .with_context(|| format!("canonicalize {}", exe.display()))?;
    let dir = real
        .parent()
        .with_context(|| format!("executable has no parent directory {}", real.display()))?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn paths_join_onto_root() {
        let paths = LauncherPaths::new("/opt/finops");
        assert_eq!(
            paths.data_path,
            PathBuf::from("/opt/finops/data/aws_finops_data.json")
        );
        assert_eq!(paths.config_path, PathBuf::from("/opt/finops/launcher.toml"));
    }

    #[test]
    fn data_present_follows_filesystem() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = LauncherPaths::new(temp.path());
        assert!(!paths.data_present());

        fs::create_dir_all(paths.data_path.parent().expect("parent")).expect("mkdir");
        fs::write(&paths.data_path, b"").expect("write");
        assert!(paths.data_present());
    }

    #[test]
    fn directory_at_data_path_counts_as_present() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = LauncherPaths::new(temp.path());
        fs::create_dir_all(&paths.data_path).expect("mkdir");
        assert!(paths.data_present());
    }

    #[test]
    fn dir_of_executable_returns_canonical_parent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let exe = temp.path().join("finops-launcher");
        fs::write(&exe, b"").expect("write");

        let dir = dir_of_executable(&exe).expect("dir");
        assert_eq!(dir, temp.path().canonicalize().expect("canonicalize"));
    }

    #[cfg(unix)]
    #[test]
    fn dir_of_executable_follows_symlinks() {
        let install = tempfile::tempdir().expect("install");
        let bin = tempfile::tempdir().expect("bin");
        let exe = install.path().join("finops-launcher");
        fs::write(&exe, b"").expect("write");
        let link = bin.path().join("finops-launcher");
        std::os::unix::fs::symlink(&exe, &link).expect("symlink");

        let dir = dir_of_executable(&link).expect("dir");
        assert_eq!(dir, install.path().canonicalize().expect("canonicalize"));
    }

    #[test]
    fn dir_of_missing_executable_errors() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(dir_of_executable(&temp.path().join("gone")).is_err());
    }
}
