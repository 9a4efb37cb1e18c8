//! Stable exit codes for the launcher.
//!
//! Once the dashboard has taken over, its own exit code is reported instead.

/// Dashboard exited successfully. Informational: the launcher never returns it
/// itself, it only passes the dashboard's status through in spawn hand-off.
pub const OK: i32 = 0;
/// Data file missing, or the launcher failed before hand-off.
pub const FAILURE: i32 = 1;
/// Dashboard program exists but could not be executed.
pub const NOT_EXECUTABLE: i32 = 126;
/// Dashboard program was not found on `PATH`.
pub const NOT_FOUND: i32 = 127;
/// Base added to the signal number when the dashboard is killed by a signal.
pub const SIGNAL_BASE: i32 = 128;
