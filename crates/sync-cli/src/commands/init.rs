//! Init command: interactive machine setup

use std::path::PathBuf;

use colored::Colorize;
use sync_core::context::SYNC_CONFIG_FILE;
use sync_core::{MachineConfig, validate_project_name};

use super::{Session, absolute};
use crate::error::{CliError, Result};
use crate::prompt::{ask_optional, ask_with_default, confirm_no_default};

/// Run the init command
///
/// Prompts for the machine name, its global config directory and any
/// projects, then writes the machine's entry to the registry.
pub fn run_init(session: &Session) -> Result<()> {
    let mut config = session.load_config()?;

    println!("{}\n", "Claude Config Sync - Machine Setup".bold());

    let machine_name = ask_with_default("Machine name", &session.machine)?;
    if machine_name.is_empty() {
        return Err(CliError::user("Machine name cannot be empty."));
    }

    let existing = config.machine(&machine_name).cloned();
    if existing.is_some() {
        println!("\nExisting config found for \"{machine_name}\".");
        if !confirm_no_default("Update it?")? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let default_global = match &existing {
        Some(machine) => machine.global_config_path.clone(),
        None => default_global_path()?,
    };
    let global = ask_with_default(
        "Global config path (~/.claude)",
        &default_global.display().to_string(),
    )?;
    let global = absolute(&PathBuf::from(global))?;
    if !global.exists() {
        println!("{} {} does not exist.", "Warning:".yellow(), global.display());
    }

    let mut machine = MachineConfig::new(&global);
    if let Some(previous) = &existing {
        machine.projects = previous.projects.clone();
    }

    println!("\nAdd projects to sync (leave name empty to finish):");
    if !machine.projects.is_empty() {
        println!("Current projects:");
        for (name, path) in &machine.projects {
            println!("  {name}: {}", path.display());
        }
        println!();
    }

    loop {
        let name = ask_optional("Project name (empty to finish)")?;
        if name.is_empty() {
            break;
        }
        if let Err(e) = validate_project_name(&name) {
            println!("  {} {e}", "Skipped:".yellow());
            continue;
        }

        let path = ask_optional(&format!("  Path for \"{name}\""))?;
        if path.is_empty() {
            continue;
        }

        let resolved = absolute(&PathBuf::from(path))?;
        if !resolved.exists() {
            println!("  {} {} does not exist.", "Warning:".yellow(), resolved.display());
        }
        machine.upsert_project(&name, &resolved)?;
        println!("  Added: {name} \u{2192} {}", resolved.display());
    }

    let project_count = machine.projects.len();
    config.set_machine(&machine_name, machine);
    config.save(&session.ctx)?;

    println!(
        "\n{} configuration for \"{machine_name}\" to {SYNC_CONFIG_FILE}",
        "Saved".green().bold()
    );
    println!("  Global: {}", global.display());
    println!("  Projects: {project_count}");
    Ok(())
}

fn default_global_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".claude"))
        .ok_or_else(|| CliError::user("Could not determine the home directory"))
}
