//! Project registry commands: add, remove, rename

use std::fs;
use std::path::Path;

use colored::Colorize;
use sync_core::context::SYNC_CONFIG_FILE;
use sync_core::registry::{check_rename_target, rename_project_dir};
use sync_core::validate_project_name;

use super::{Session, absolute};
use crate::error::Result;
use crate::prompt::confirm_no_default;

/// Run the add-project command
pub fn run_add_project(session: &Session, name: &str, path: &Path) -> Result<()> {
    validate_project_name(name)?;
    let mut config = session.load_config()?;
    let machine = config.require_machine_mut(&session.machine)?;

    let resolved = absolute(path)?;
    if !resolved.exists() {
        println!("{} {} does not exist.", "Warning:".yellow(), resolved.display());
    }

    match machine.upsert_project(name, &resolved)? {
        Some(previous) => println!(
            "Updating project \"{name}\": {} \u{2192} {}",
            previous.display(),
            resolved.display()
        ),
        None => println!("Adding project \"{name}\": {}", resolved.display()),
    }

    config.save(&session.ctx)?;
    println!("Saved to {SYNC_CONFIG_FILE}");
    Ok(())
}

/// Run the remove-project command
pub fn run_remove_project(session: &Session, name: &str) -> Result<()> {
    let mut config = session.load_config()?;
    let machine = config.require_machine_mut(&session.machine)?;
    let path = machine.remove_project(&session.machine, name)?;
    config.save(&session.ctx)?;

    println!(
        "Removed project \"{name}\" ({}) from machine \"{}\".",
        path.display(),
        session.machine
    );

    let repo_dir = session.ctx.project_dir(&session.machine, name);
    if repo_dir.exists() {
        println!();
        let prompt = format!("Also delete repo directory {}?", repo_dir.display());
        if confirm_no_default(&prompt)? {
            fs::remove_dir_all(&repo_dir).map_err(|e| sync_fs::Error::io(&repo_dir, e))?;
            tracing::info!(path = %repo_dir.display(), "Deleted repo project directory");
            println!("Deleted {}", repo_dir.display());
        } else {
            println!("Repo directory kept.");
        }
    }

    Ok(())
}

/// Run the rename-project command
///
/// The repo directory is checked before the registry is touched, so a
/// clash leaves everything as it was.
pub fn run_rename_project(session: &Session, old_name: &str, new_name: &str) -> Result<()> {
    validate_project_name(old_name)?;
    validate_project_name(new_name)?;

    let mut config = session.load_config()?;
    let machine = config.require_machine_mut(&session.machine)?;
    machine.rename_project(&session.machine, old_name, new_name)?;

    if session.ctx.project_dir(&session.machine, old_name).exists() {
        check_rename_target(&session.ctx, &session.machine, new_name)?;
    }

    config.save(&session.ctx)?;
    println!("Renamed project \"{old_name}\" \u{2192} \"{new_name}\" in {SYNC_CONFIG_FILE}");

    if let Some((from, to)) = rename_project_dir(&session.ctx, &session.machine, old_name, new_name)? {
        println!(
            "Renamed repo directory: {} \u{2192} {}",
            from.display(),
            to.display()
        );
    }

    Ok(())
}
