//! List command: every tracked path and where it exists

use colored::Colorize;
use sync_core::{LogicalFile, catalog};

use super::Session;
use crate::error::Result;

fn marker(exists: bool) -> char {
    if exists { '+' } else { '-' }
}

/// One listing row, label padded to `width`.
pub fn list_row(file: &LogicalFile, width: usize) -> String {
    format!(
        "  {:<width$} local[{}]  repo[{}]  {}",
        file.label,
        marker(sync_fs::exists(&file.local_path)),
        marker(sync_fs::exists(&file.repo_path)),
        file.local_path.display(),
        width = width + 2,
    )
}

/// Run the list command
pub fn run_list(session: &Session) -> Result<()> {
    let config = session.machine_config()?;
    let files = catalog::files_for(&session.ctx, &session.machine, &config);

    println!("Registered paths for machine: {}\n", session.machine.cyan());
    println!("Global config: {}", config.global_config_path.display());
    println!("Projects: {}\n", config.projects.len());

    let width = files.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for file in &files {
        println!("{}", list_row(file, width));
    }

    println!("\n  {}", "[+] exists  [-] missing".dimmed());
    Ok(())
}
