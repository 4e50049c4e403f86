//! Push command: repo configs onto this machine

use colored::Colorize;
use sync_core::{FileFilter, PushOptions, Reconciler};

use super::{Session, dry_run_prefix};
use crate::error::{CliError, Result};
use crate::output::{Direction, TerminalReporter};
use crate::prompt::TerminalConfirm;

/// Run the push command
pub fn run_push(session: &Session, filter: FileFilter, options: PushOptions) -> Result<()> {
    filter.validate()?;
    let files = filter.apply(session.files()?)?;

    println!(
        "{}Pushing configs to machine: {}\n",
        dry_run_prefix(options.dry_run),
        session.machine.cyan()
    );

    let reconciler = Reconciler::new(session.ctx.clone());
    let mut reporter = TerminalReporter::new(Direction::Push);
    let report = reconciler.push(&files, &options, &mut TerminalConfirm, &mut reporter)?;

    let pushed = if report.dry_run { "would be pushed" } else { "pushed" };
    let failed = if report.failed > 0 {
        format!(", {} failed", report.failed)
    } else {
        String::new()
    };
    println!(
        "\nDone: {} {pushed}, {} skipped{failed}.",
        report.pushed,
        report.skipped()
    );

    if report.failed > 0 {
        return Err(CliError::user(format!(
            "{} file(s) could not be pushed",
            report.failed
        )));
    }
    Ok(())
}
