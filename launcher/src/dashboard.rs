//! The dashboard invocation, built without side effects.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::config::HandoffMode;

/// Program resolved through `PATH`.
pub const PROGRAM: &str = "streamlit";
/// Streamlit entry point, relative to the launcher directory.
pub const APP: &str = "streamlit_app.py";
pub const PORT: u16 = 8501;
pub const ADDRESS: &str = "0.0.0.0";

/// Fully resolved dashboard command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the dashboard (the launcher directory).
    pub workdir: PathBuf,
    pub handoff: HandoffMode,
}

impl DashboardCommand {
    /// `streamlit run streamlit_app.py --server.port=8501 --server.address=0.0.0.0`.
    pub fn new(workdir: &Path, handoff: HandoffMode) -> Self {
        Self {
            program: PROGRAM.to_string(),
            args: vec![
                "run".to_string(),
                APP.to_string(),
                format!("--server.port={PORT}"),
                format!("--server.address={ADDRESS}"),
            ],
            workdir: workdir.to_path_buf(),
            handoff,
        }
    }

    /// Address the dashboard will listen on, for the status line.
    pub fn url() -> String {
        format!("http://{ADDRESS}:{PORT}")
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.workdir);
        cmd
    }
}
