//! Diff engine: status, unified diff and newer side of a logical file

use std::fs;
use std::path::Path;

use similar::TextDiff;

use crate::{ComparisonResult, FileStatus, LogicalFile, Side};

/// Shown in place of a diff when one cannot be produced.
pub const DIFF_UNAVAILABLE: &str = "(unable to generate diff)";

/// Lines of context around each hunk.
const CONTEXT_LINES: usize = 3;

/// Derive the status of a logical file from what is on disk right now.
pub fn status(file: &LogicalFile) -> FileStatus {
    let local = sync_fs::exists(&file.local_path);
    let repo = sync_fs::exists(&file.repo_path);

    match (local, repo) {
        (false, false) => FileStatus::MissingBoth,
        (true, false) => FileStatus::LocalOnly,
        (false, true) => FileStatus::RepoOnly,
        (true, true) if sync_fs::identical(&file.local_path, &file.repo_path) => {
            FileStatus::Identical
        }
        (true, true) => FileStatus::Modified,
    }
}

/// Unified diff turning `from` into `to`.
///
/// Empty when both files hold the same text. Falls back to
/// [`DIFF_UNAVAILABLE`] when either side cannot be read as UTF-8 text.
pub fn unified_diff(from: &Path, to: &Path) -> String {
    let (old, new) = match (fs::read_to_string(from), fs::read_to_string(to)) {
        (Ok(old), Ok(new)) => (old, new),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(from = %from.display(), to = %to.display(), error = %e, "Diff unavailable");
            return DIFF_UNAVAILABLE.to_string();
        }
    };

    if old == new {
        return String::new();
    }

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&from.display().to_string(), &to.display().to_string())
        .to_string()
}

/// Compare both sides of a logical file.
///
/// For modified files the diff goes from the repo copy to the local copy, and
/// the newer side is whichever has the strictly later modification time
/// (ties go to the repo).
pub fn compare(file: &LogicalFile) -> ComparisonResult {
    let status = status(file);

    let (diff, newer_side) = if status == FileStatus::Modified {
        let diff = unified_diff(&file.repo_path, &file.local_path);
        (Some(diff), newer_side(file))
    } else {
        (None, None)
    };

    ComparisonResult {
        file: file.clone(),
        status,
        diff,
        newer_side,
    }
}

fn newer_side(file: &LogicalFile) -> Option<Side> {
    let local = sync_fs::mtime(&file.local_path)?;
    let repo = sync_fs::mtime(&file.repo_path)?;
    Some(if local > repo { Side::Local } else { Side::Repo })
}
