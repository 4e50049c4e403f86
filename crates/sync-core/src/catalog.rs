//! Path catalog: which logical files a machine tracks
//!
//! The catalog is a pure mapping from a machine's registered locations to an
//! ordered list of [`LogicalFile`]s. Global files come first, then each project
//! in registration order.

use std::path::{Path, PathBuf};

use crate::registry::MachineConfig;
use crate::{LogicalFile, SyncContext};

/// Files tracked under the global config directory.
pub const GLOBAL_FILES: &[&str] = &[
    "CLAUDE.md",
    "settings.json",
    "settings.local.json",
    "plugins/installed_plugins.json",
    "plugins/known_marketplaces.json",
];

/// Files tracked under each project root.
pub const PROJECT_FILES: &[&str] = &[
    "CLAUDE.md",
    ".claude/settings.json",
    ".claude/settings.local.json",
];

/// Per-project memory file, stored under the global config directory.
pub const PROJECT_MEMORY_FILE: &str = "MEMORY.md";

/// Identifier the global config directory uses for a project: its path with
/// every `/` replaced by `-`.
pub fn project_claude_id(project_path: &Path) -> String {
    project_path.to_string_lossy().replace('/', "-")
}

/// Build the ordered list of logical files for one machine.
pub fn files_for(ctx: &SyncContext, machine: &str, config: &MachineConfig) -> Vec<LogicalFile> {
    let machine_dir = ctx.machine_dir(machine);
    let global = &config.global_config_path;
    let mut files = Vec::with_capacity(GLOBAL_FILES.len() + config.projects.len() * 4);

    for file in GLOBAL_FILES {
        files.push(LogicalFile::new(
            format!("global/{file}"),
            global.join(file),
            machine_dir.join("global").join(file),
        ));
    }

    for (name, project_path) in &config.projects {
        let repo_dir = ctx.project_dir(machine, name);

        for file in PROJECT_FILES {
            files.push(LogicalFile::new(
                format!("projects/{name}/{file}"),
                project_path.join(file),
                repo_dir.join(file),
            ));
        }

        files.push(LogicalFile::new(
            format!("projects/{name}/memory/{PROJECT_MEMORY_FILE}"),
            memory_path(global, project_path),
            repo_dir.join("memory").join(PROJECT_MEMORY_FILE),
        ));
    }

    tracing::debug!(machine, count = files.len(), "Built file catalog");
    files
}

fn memory_path(global: &Path, project_path: &Path) -> PathBuf {
    global
        .join("projects")
        .join(project_claude_id(project_path))
        .join("memory")
        .join(PROJECT_MEMORY_FILE)
}
