//! Command implementations for sync-cli

pub mod clean_backups;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod project;
pub mod pull;
pub mod push;
pub mod status;

pub use clean_backups::run_clean_backups;
pub use completions::run_completions;
pub use config::{run_config_set_repo, run_config_show};
pub use init::run_init;
pub use list::run_list;
pub use project::{run_add_project, run_remove_project, run_rename_project};
pub use pull::run_pull;
pub use push::run_push;
pub use status::run_status;

use std::path::Path;

use sync_core::{
    LogicalFile, MachineConfig, SyncConfig, SyncContext, UserPreferences, catalog,
    current_machine_name,
};

use crate::error::Result;

/// Sync repository and machine identity for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub ctx: SyncContext,
    pub machine: String,
}

impl Session {
    /// Resolve the repo from the flag/environment, then the user preference
    /// file; the machine is the override if given, else the hostname.
    pub fn open(repo: Option<&Path>, machine: Option<String>) -> Result<Self> {
        let preferences = UserPreferences::default_path()
            .map(|path| UserPreferences::load_lenient(&path))
            .unwrap_or_default();
        let ctx = SyncContext::resolve(repo, &preferences)?;

        let machine = match machine {
            Some(name) => name,
            None => current_machine_name()?,
        };
        tracing::debug!(machine = %machine, repo = %ctx.repo_root().display(), "Session opened");

        Ok(Self { ctx, machine })
    }

    pub fn load_config(&self) -> Result<SyncConfig> {
        Ok(SyncConfig::load(&self.ctx)?)
    }

    /// This machine's registry entry, or an error pointing at `init`.
    pub fn machine_config(&self) -> Result<MachineConfig> {
        Ok(self.load_config()?.require_machine(&self.machine)?.clone())
    }

    /// The machine's full catalog of logical files.
    pub fn files(&self) -> Result<Vec<LogicalFile>> {
        let config = self.machine_config()?;
        Ok(catalog::files_for(&self.ctx, &self.machine, &config))
    }
}

/// Label prefixed with `[DRY RUN] ` when `dry_run`.
pub(crate) fn dry_run_prefix(dry_run: bool) -> &'static str {
    if dry_run { "[DRY RUN] " } else { "" }
}

/// Turn a possibly relative path into an absolute one against the working directory.
pub(crate) fn absolute(path: &Path) -> Result<std::path::PathBuf> {
    Ok(std::path::absolute(path)?)
}
