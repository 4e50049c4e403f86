//! File store primitives
//!
//! Every function here reads the filesystem fresh on each call. Nothing is
//! cached, so callers always see the current state of both sides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{SecondsFormat, Utc};

use crate::{Error, Result};

/// Infix inserted between a file's name and the timestamp of its backup.
pub const BACKUP_MARKER: &str = ".backup-";

/// Check whether a path exists. Never fails.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Compare two files byte for byte.
///
/// Returns `false` when either side is missing or unreadable.
pub fn identical(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(meta_a), Ok(meta_b)) => {
            if !meta_a.is_file() || !meta_b.is_file() || meta_a.len() != meta_b.len() {
                return false;
            }
        }
        _ => return false,
    }

    match (fs::read(a), fs::read(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

/// Copy `src` to `dest`, creating any missing parent directories of `dest`.
///
/// An existing `dest` is overwritten.
pub fn copy_creating_dirs(src: &Path, dest: &Path) -> Result<()> {
    let content = fs::read(src).map_err(|e| Error::io(src, e))?;

    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(dest, content).map_err(|e| Error::io(dest, e))?;
    tracing::debug!(src = %src.display(), dest = %dest.display(), "Copied file");
    Ok(())
}

/// Move `path` aside to `<path>.backup-<timestamp>`.
///
/// Returns `Ok(None)` without touching anything when `path` does not exist.
/// After a successful call the original path no longer exists.
///
/// Timestamps have millisecond resolution; two backups of the same file in
/// the same millisecond would collide.
pub fn backup(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let backup_path = backup_path_for(path, &backup_timestamp());
    fs::rename(path, &backup_path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), backup = %backup_path.display(), "Backed up file");
    Ok(Some(backup_path))
}

/// Read a file's modification time, `None` if it is missing or unavailable.
pub fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Whether a file name looks like a backup produced by [`backup`].
pub fn is_backup_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(BACKUP_MARKER))
        .unwrap_or(false)
}

/// Current UTC time rendered without characters that are invalid in file names.
fn backup_timestamp() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

fn backup_path_for(path: &Path, timestamp: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_MARKER);
    name.push(timestamp);
    PathBuf::from(name)
}
