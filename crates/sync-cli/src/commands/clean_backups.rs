//! Clean-backups command

use colored::Colorize;
use sync_core::{delete_backups, find_backups};

use super::Session;
use crate::error::Result;
use crate::prompt::confirm_no_default;

/// Run the clean-backups command
///
/// Looks for backups next to every local file of this machine, lists them
/// and deletes them once confirmed.
pub fn run_clean_backups(session: &Session, yes: bool) -> Result<()> {
    let files = session.files()?;
    let backups = find_backups(&files);

    if backups.is_empty() {
        println!("No backup files found.");
        return Ok(());
    }

    println!("Found {} backup file(s):\n", backups.len());
    for backup in &backups {
        println!("  {}", backup.display());
    }
    println!();

    if !yes && !confirm_no_default(&format!("Delete all {} backup file(s)?", backups.len()))? {
        println!("Cancelled.");
        return Ok(());
    }

    let report = delete_backups(&backups);
    for path in &report.deleted {
        println!("  {}  {}", "deleted".green(), file_name(path));
    }
    for (path, reason) in &report.failed {
        eprintln!("  {}    {}: {reason}", "error".red(), file_name(path));
    }

    println!("\nDone: {} backup file(s) deleted.", report.deleted.len());
    Ok(())
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
