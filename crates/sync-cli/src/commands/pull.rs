//! Pull command: local configs into the sync repo

use colored::Colorize;
use sync_core::{FileFilter, PullOptions, Reconciler};

use super::{Session, dry_run_prefix};
use crate::error::{CliError, Result};
use crate::output::{Direction, TerminalReporter};

/// Run the pull command
///
/// The summary is printed before committing, so a failed commit still shows
/// what was copied.
pub fn run_pull(session: &Session, filter: FileFilter, options: PullOptions, commit: bool) -> Result<()> {
    filter.validate()?;
    let files = filter.apply(session.files()?)?;

    println!(
        "{}Pulling configs for machine: {}\n",
        dry_run_prefix(options.dry_run),
        session.machine.cyan()
    );

    let reconciler = Reconciler::new(session.ctx.clone());
    let mut reporter = TerminalReporter::new(Direction::Pull);
    let report = reconciler.pull(&session.machine, &files, &options, &mut reporter)?;

    let copied = if report.dry_run { "would be copied" } else { "copied" };
    let failed = if report.failed > 0 {
        format!(", {} failed", report.failed)
    } else {
        String::new()
    };
    println!(
        "\nDone: {} {copied}, {} unchanged, {} missing locally{failed}.",
        report.copied, report.unchanged, report.missing
    );

    if commit && let Some(info) = reconciler.commit_pulled(&session.machine, &report)? {
        println!(
            "\n{} {} ({})",
            "Committed:".green().bold(),
            info.summary,
            info.hash.dimmed()
        );
    }

    if report.failed > 0 {
        return Err(CliError::user(format!(
            "{} file(s) could not be pulled",
            report.failed
        )));
    }
    Ok(())
}
