use std::io;

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunSummary, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run(&args, &mut io::stdout().lock())?;

    // Duplicates and unlocalized literals are advisory only.
    Ok(ExitStatus::Success)
}
