//! Machine and project registry (`sync.config.json`)

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sync_fs::ConfigStore;

use crate::context::malformed_or_fs;
use crate::{Error, Result, SyncContext};

/// Contents of `sync.config.json`: every machine sharing the sync repository.
///
/// Machines and projects keep the order they were registered in, both when
/// iterated and when written back to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub machines: IndexMap<String, MachineConfig>,
}

/// One machine's tracked locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfig {
    /// Global config directory, usually `~/.claude`
    pub global_config_path: PathBuf,
    /// Project name to absolute project root
    #[serde(default)]
    pub projects: IndexMap<String, PathBuf>,
}

impl SyncConfig {
    /// Load the registry of the sync repository.
    ///
    /// A missing file is an empty registry. A malformed file is an error; it is
    /// never repaired.
    pub fn load(ctx: &SyncContext) -> Result<Self> {
        let path = ctx.config_file();
        ConfigStore::new()
            .load_or_default(&path)
            .map_err(|e| malformed_or_fs(&path, e))
    }

    pub fn save(&self, ctx: &SyncContext) -> Result<()> {
        ConfigStore::new().save(&ctx.config_file(), self)?;
        tracing::debug!(path = %ctx.config_file().display(), "Saved sync config");
        Ok(())
    }

    pub fn machine(&self, name: &str) -> Option<&MachineConfig> {
        self.machines.get(name)
    }

    /// The machine's entry, or a configuration error pointing at `init`.
    pub fn require_machine(&self, name: &str) -> Result<&MachineConfig> {
        self.machines
            .get(name)
            .ok_or_else(|| Error::MachineNotRegistered {
                machine: name.to_string(),
            })
    }

    pub fn require_machine_mut(&mut self, name: &str) -> Result<&mut MachineConfig> {
        self.machines
            .get_mut(name)
            .ok_or_else(|| Error::MachineNotRegistered {
                machine: name.to_string(),
            })
    }

    /// Insert or replace a machine entry.
    pub fn set_machine(&mut self, name: impl Into<String>, config: MachineConfig) {
        self.machines.insert(name.into(), config);
    }
}

impl MachineConfig {
    pub fn new(global_config_path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: global_config_path.into(),
            projects: IndexMap::new(),
        }
    }

    /// Register or re-point a project. Returns the previous path, if any.
    pub fn upsert_project(&mut self, name: &str, path: impl Into<PathBuf>) -> Result<Option<PathBuf>> {
        validate_project_name(name)?;
        Ok(self.projects.insert(name.to_string(), path.into()))
    }

    /// Unregister a project and return the path it pointed at.
    pub fn remove_project(&mut self, machine: &str, name: &str) -> Result<PathBuf> {
        let available = self.available_projects();
        self.projects
            .shift_remove(name)
            .ok_or_else(|| Error::ProjectNotFound {
                name: name.to_string(),
                machine: machine.to_string(),
                available,
            })
    }

    /// Move a project to a new name, keeping its path and its position.
    pub fn rename_project(&mut self, machine: &str, old: &str, new: &str) -> Result<()> {
        validate_project_name(old)?;
        validate_project_name(new)?;

        if !self.projects.contains_key(old) {
            return Err(Error::ProjectNotFound {
                name: old.to_string(),
                machine: machine.to_string(),
                available: self.available_projects(),
            });
        }
        if self.projects.contains_key(new) {
            return Err(Error::ProjectExists {
                name: new.to_string(),
                machine: machine.to_string(),
            });
        }

        if let Some((index, _, path)) = self.projects.shift_remove_full(old) {
            self.projects.shift_insert(index, new.to_string(), path);
        }
        Ok(())
    }

    /// Comma-separated project names, or `(none)`.
    pub fn available_projects(&self) -> String {
        if self.projects.is_empty() {
            "(none)".to_string()
        } else {
            self.projects.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

/// Project names become directory names in the sync repository, so they must
/// be non-empty and must not contain `/`, `\` or `..`.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..");

    if invalid {
        return Err(Error::InvalidProjectName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Rename `configs/<machine>/projects/<old>` to `<new>` in the sync repository.
///
/// Returns the `(from, to)` pair when a directory was moved, `None` when the
/// old directory does not exist. Fails without touching anything when the
/// target directory already exists.
pub fn rename_project_dir(
    ctx: &SyncContext,
    machine: &str,
    old: &str,
    new: &str,
) -> Result<Option<(PathBuf, PathBuf)>> {
    let from = ctx.project_dir(machine, old);
    let to = ctx.project_dir(machine, new);

    if !from.exists() {
        return Ok(None);
    }
    check_rename_target(ctx, machine, new)?;

    fs::rename(&from, &to).map_err(|e| sync_fs::Error::io(&from, e))?;
    tracing::info!(from = %from.display(), to = %to.display(), "Renamed repo project directory");
    Ok(Some((from, to)))
}

/// Fail if renaming a project to `new` would clobber an existing repo directory.
pub fn check_rename_target(ctx: &SyncContext, machine: &str, new: &str) -> Result<()> {
    let to = ctx.project_dir(machine, new);
    if to.exists() {
        return Err(Error::RepoDirExists { path: to });
    }
    Ok(())
}
