//! User preference commands: `config set-repo` and `config show`

use std::path::Path;

use colored::Colorize;
use sync_core::UserPreferences;

use super::absolute;
use crate::error::Result;

/// Save `path` as the default sync repo in the user preference file.
///
/// Other keys already in the file are kept.
pub fn run_config_set_repo(path: &Path) -> Result<()> {
    let resolved = absolute(path)?;
    if !resolved.exists() {
        eprintln!("{} {} does not exist.", "Warning:".yellow(), resolved.display());
    }

    let config_path = UserPreferences::default_path()?;
    let mut preferences = UserPreferences::load(&config_path)?;
    preferences.repo = Some(resolved.clone());
    preferences.save(&config_path)?;

    println!("Saved repo path: {}", resolved.display());
    println!("Config file: {}", config_path.display());
    Ok(())
}

/// Print the configured default sync repo.
pub fn run_config_show() -> Result<()> {
    let config_path = UserPreferences::default_path()?;
    let preferences = UserPreferences::load_lenient(&config_path);

    match preferences.repo {
        Some(repo) => {
            println!("repo: {}", repo.display());
            println!("config file: {}", config_path.display());
        }
        None => {
            eprintln!("No repo path configured.");
            eprintln!("Run: {}", "cc-config-sync config set-repo <path>".cyan());
        }
    }
    Ok(())
}
