//! Launcher for the AWS FinOps Streamlit dashboard.
//!
//! The launcher resolves its own directory, refuses to start when the
//! collected data file is missing, and otherwise hands its process over to
//! `streamlit run streamlit_app.py` on `0.0.0.0:8501`.
//!
//! - **[`dashboard`]**: Pure construction of the dashboard command line.
//! - **[`io`]**: Configuration, filesystem layout and process hand-off.
//! - **[`launch`]**: Orchestration of the gate and the hand-off.

pub mod dashboard;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
