//! Test-only helpers for building throwaway launcher directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::layout::LauncherPaths;

/// File the fake dashboard writes its arguments to, one per line.
pub const RECORDED_ARGS: &str = "dashboard_args.txt";
/// File the fake dashboard writes its physical working directory to.
pub const RECORDED_CWD: &str = "dashboard_cwd.txt";

/// A temporary launcher directory, removed on drop.
pub struct LauncherDir {
    temp: TempDir,
}

impl LauncherDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp launcher dir")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn paths(&self) -> LauncherPaths {
        LauncherPaths::new(self.root())
    }

    /// Create the default data file with `contents`.
    pub fn write_data_file(&self, contents: &[u8]) -> Result<PathBuf> {
        let path = self.paths().data_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Copy the launcher binary into this directory so it resolves here.
    pub fn install_binary(&self, exe: &Path) -> Result<PathBuf> {
        let name = exe
            .file_name()
            .with_context(|| format!("binary has no file name {}", exe.display()))?;
        let dest = self.root().join(name);
        fs::copy(exe, &dest)
            .with_context(|| format!("copy {} to {}", exe.display(), dest.display()))?;
        Ok(dest)
    }

    /// Write a fake `streamlit` into `<root>/bin` that records its arguments and
    /// working directory, then exits with `exit_code`. Returns the `bin` directory.
    #[cfg(unix)]
    pub fn write_fake_dashboard(&self, exit_code: i32) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.root().join("bin");
        fs::create_dir_all(&bin).with_context(|| format!("create {}", bin.display()))?;
        let script = bin.join("streamlit");
        let body = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > {RECORDED_ARGS}\npwd -P > {RECORDED_CWD}\nexit {exit_code}\n"
        );
        fs::write(&script, body).with_context(|| format!("write {}", script.display()))?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("chmod {}", script.display()))?;
        Ok(bin)
    }

    /// Arguments recorded by the fake dashboard, if it ran.
    pub fn recorded_args(&self) -> Result<Option<String>> {
        read_if_exists(&self.root().join(RECORDED_ARGS))
    }

    /// Working directory recorded by the fake dashboard, if it ran.
    pub fn recorded_cwd(&self) -> Result<Option<String>> {
        Ok(read_if_exists(&self.root().join(RECORDED_CWD))?.map(|s| s.trim_end().to_string()))
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Some(contents))
}
