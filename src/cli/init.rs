//! Init command implementation.

use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use colored::Colorize;

use crate::error::Error;
use crate::init::{InitActionRunner, InitOutcome, TerminalPrompter, TokioFileSystem};
use crate::logger::TracingLogger;

pub async fn run_init(directory: &Path) -> Result<()> {
    let runner = InitActionRunner::new(&TokioFileSystem, &TerminalPrompter, &TracingLogger);

    match runner.run(directory).await {
        InitOutcome::Created { path } => {
            println!(
                "{}",
                format!("Config file created at {}", path.display()).green()
            );
            println!("You can now customize the file to suit your needs.");
            Ok(())
        }
        InitOutcome::SkippedExisting { .. } => Ok(()),
        InitOutcome::Cancelled {
            cause: Error::Prompt(e),
        } if e.is_cancelled() => {
            eprintln!("{}", "Configuration cancelled.".yellow());
            Ok(())
        }
        InitOutcome::Cancelled { .. } => Ok(()),
        InitOutcome::WriteFailed { path, .. } => {
            Err(eyre!("{} was not written", path.display()))
        }
    }
}
