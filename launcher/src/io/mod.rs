//! Side-effecting helpers: configuration, filesystem layout, process hand-off.

pub mod config;
pub mod layout;
pub mod process;
