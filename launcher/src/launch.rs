//! Orchestration for one launcher invocation.
//!
//! Resolve the launcher directory, read the hand-off mode from `launcher.toml`,
//! gate on the data file, then hand off to the dashboard. When the data file is
//! missing nothing is spawned and nothing on disk changes. A broken config file
//! never blocks the launch.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info, instrument, warn};

use crate::dashboard::DashboardCommand;
use crate::exit_codes;
use crate::io::config::{LauncherConfig, load_config};
use crate::io::layout::{LauncherPaths, launcher_dir};
use crate::io::process::{DashboardRunner, ProcessHandoff, launch_error_code};

/// Playbook named in the hint printed when the data file is missing.
pub const COLLECT_PLAYBOOK: &str = "playbooks/finops_collect.yml";

/// Configuration and paths for a launcher directory.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    pub paths: LauncherPaths,
    pub config: LauncherConfig,
}

impl LaunchContext {
    /// Falls back to the default config when `launcher.toml` cannot be read or parsed.
    pub fn load(root: &Path) -> Self {
        let paths = LauncherPaths::new(root);
        let config = match load_config(&paths.config_path) {
            Ok(config) => config,
            Err(err) => {
                warn!(err = %format!("{err:#}"), "ignoring launcher config");
                LauncherConfig::default()
            }
        };
        debug!(root = %root.display(), ?config, "loaded launcher config");
        Self { paths, config }
    }

    pub fn dashboard_command(&self) -> DashboardCommand {
        DashboardCommand::new(&self.paths.root, self.config.handoff)
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Data file absent; the dashboard was not started.
    PreconditionNotMet { data_path: PathBuf },
    /// Dashboard ran and exited (spawn hand-off).
    Exited { code: i32 },
    /// Dashboard could not be started.
    HandoffFailed {
        program: String,
        code: i32,
        reason: String,
    },
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::PreconditionNotMet { .. } => exit_codes::FAILURE,
            LaunchOutcome::Exited { code } | LaunchOutcome::HandoffFailed { code, .. } => *code,
        }
    }
}

/// Gate on the data file, print status to `out`, and hand off through `runner`.
#[instrument(skip_all, fields(root = %ctx.paths.root.display()))]
pub fn launch<R: DashboardRunner, W: Write>(
    ctx: &LaunchContext,
    runner: &R,
    out: &mut W,
) -> Result<LaunchOutcome> {
    if !ctx.paths.data_present() {
        warn!(data_path = %ctx.paths.data_path.display(), "data file missing, not launching");
        report_missing_data(ctx, out)?;
        return Ok(LaunchOutcome::PreconditionNotMet {
            data_path: ctx.paths.data_path.clone(),
        });
    }

    let cmd = ctx.dashboard_command();
    info!(
        program = %cmd.program,
        args = ?cmd.args,
        mode = ?cmd.handoff,
        "handing off to dashboard"
    );
    writeln!(out, "🚀 Starting FinOps dashboard on {}", DashboardCommand::url()).context("write status")?;
    out.flush().context("flush status")?;

    match runner.hand_off(&cmd) {
        Ok(code) => Ok(LaunchOutcome::Exited { code }),
        Err(err) => {
            error!(err = %err, program = %cmd.program, "dashboard hand-off failed");
            Ok(LaunchOutcome::HandoffFailed {
                code: launch_error_code(&err),
                reason: err.to_string(),
                program: cmd.program,
            })
        }
    }
}

/// Launch from the directory holding the running executable.
pub fn launch_from_exe<W: Write>(out: &mut W) -> Result<LaunchOutcome> {
    let root = launcher_dir()?;
    let ctx = LaunchContext::load(&root);
    launch(&ctx, &ProcessHandoff, out)
}

fn report_missing_data<W: Write>(ctx: &LaunchContext, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "⚠️  Data file not found: {}",
        ctx.paths.data_path.display()
    )
    .context("write missing data warning")?;
    writeln!(out, "   Collect it first with:").context("write collect hint")?;
    writeln!(out, "   ansible-playbook {COLLECT_PLAYBOOK}").context("write collect hint")?;
    Ok(())
}
