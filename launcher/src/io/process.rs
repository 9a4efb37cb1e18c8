//! Handing control to the dashboard process.

use std::io;
use std::process::{Command, ExitStatus};

use tracing::{debug, instrument};

use crate::dashboard::DashboardCommand;
use crate::exit_codes;
use crate::io::config::HandoffMode;

/// Transfers control to the dashboard.
pub trait DashboardRunner {
    /// Returns the dashboard's exit code when the launcher outlives the
    /// hand-off. A successful `exec` never returns.
    fn hand_off(&self, cmd: &DashboardCommand) -> io::Result<i32>;
}

/// Runs the real dashboard according to `DashboardCommand::handoff`.
pub struct ProcessHandoff;

impl DashboardRunner for ProcessHandoff {
    #[instrument(skip_all, fields(program = %cmd.program, mode = ?cmd.handoff))]
    fn hand_off(&self, cmd: &DashboardCommand) -> io::Result<i32> {
        let command = cmd.to_command();
        match cmd.handoff {
            HandoffMode::Exec => exec(command),
            HandoffMode::Spawn => spawn_and_wait(command),
        }
    }
}

#[cfg(unix)]
fn exec(mut command: Command) -> io::Result<i32> {
    use std::os::unix::process::CommandExt;

    debug!("replacing launcher process image");
    // Only returns on failure.
    Err(command.exec())
}

#[cfg(not(unix))]
fn exec(command: Command) -> io::Result<i32> {
    debug!("exec unsupported on this platform, spawning instead");
    spawn_and_wait(command)
}

/// Spawn the dashboard with inherited stdio and wait for it to exit.
pub fn spawn_and_wait(mut command: Command) -> io::Result<i32> {
    debug!("spawning dashboard");
    let status = command.status()?;
    let code = exit_code(status);
    debug!(exit_code = code, "dashboard exited");
    Ok(code)
}

/// Map a child's exit status to the launcher's exit code.
///
/// Death by signal `N` becomes `128 + N`, as a shell reports it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }
    exit_codes::FAILURE
}

/// Exit code for a dashboard that could not be started, following shell conventions.
pub fn launch_error_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => exit_codes::NOT_FOUND,
        io::ErrorKind::PermissionDenied => exit_codes::NOT_EXECUTABLE,
        _ => exit_codes::FAILURE,
    }
}
