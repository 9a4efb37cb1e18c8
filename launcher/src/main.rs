//! `finops-launcher`: start the FinOps dashboard once its data has been collected.
//!
//! Paths are resolved relative to the launcher binary, so it can be invoked
//! from any working directory.

use anyhow::Result;
use clap::Parser;
use finops_launcher::launch::{LaunchOutcome, launch_from_exe};
use finops_launcher::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "finops-launcher",
    version,
    about = "Start the AWS FinOps dashboard if collected data is present"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    let code = match run() {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run() -> Result<LaunchOutcome> {
    let mut stdout = std::io::stdout().lock();
    let outcome = launch_from_exe(&mut stdout)?;
    if let LaunchOutcome::HandoffFailed {
        program, reason, ..
    } = &outcome
    {
        eprintln!("failed to start {program}: {reason}");
    }
    Ok(outcome)
}
