//! Launcher configuration stored next to the binary as `launcher.toml`.
//!
//! The file only selects how control passes to the dashboard. The data path
//! and the dashboard command line are fixed and cannot be configured.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// File name of the optional configuration, relative to the launcher directory.
pub const CONFIG_FILE: &str = "launcher.toml";

/// Launcher configuration (TOML).
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LauncherConfig {
    pub handoff: HandoffMode,
}

/// How control passes to the dashboard.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandoffMode {
    /// Replace the launcher process image. Falls back to `Spawn` off Unix.
    #[default]
    Exec,
    /// Spawn the dashboard as a child and exit with its status.
    ///
    /// Signals sent to the launcher are not forwarded: a SIGTERM aimed at the
    /// launcher alone leaves the dashboard running without its parent.
    Spawn,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LauncherConfig::default()`.
pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        return Ok(LauncherConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join(CONFIG_FILE)).expect("load");
        assert_eq!(cfg.handoff, HandoffMode::Exec);
    }

    #[test]
    fn handoff_mode_is_read() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "handoff = \"spawn\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.handoff, HandoffMode::Spawn);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "port = 9000\n[dashboard]\naddress = \"127.0.0.1\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg, LauncherConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "not = [valid").expect("write");

        let err = load_config(&path).expect_err("malformed config");
        assert!(format!("{err:#}").contains("parse"));
    }
}
