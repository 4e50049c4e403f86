//! Finding and deleting backups left behind by push

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::LogicalFile;

/// Outcome of deleting a set of backup files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Backups removed
    pub deleted: Vec<PathBuf>,
    /// Backups that could not be removed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

/// List backup files next to the local copies of `files`, sorted by path.
///
/// Only the immediate parent directory of each local path is searched.
/// Directories that do not exist are skipped.
pub fn find_backups(files: &[LogicalFile]) -> Vec<PathBuf> {
    let dirs: BTreeSet<PathBuf> = files
        .iter()
        .filter_map(|f| f.local_path.parent().map(PathBuf::from))
        .collect();

    let mut backups = BTreeSet::new();
    for dir in &dirs {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && sync_fs::is_backup_file(&path) {
                backups.insert(path);
            }
        }
    }

    tracing::debug!(dirs = dirs.len(), found = backups.len(), "Scanned for backups");
    backups.into_iter().collect()
}

/// Delete each backup, carrying on past failures.
pub fn delete_backups(paths: &[PathBuf]) -> CleanReport {
    let mut report = CleanReport::default();

    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Deleted backup");
                report.deleted.push(path.clone());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to delete backup");
                report.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    report
}
