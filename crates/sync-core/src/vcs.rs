//! Version control abstraction
//!
//! Pull hands the repo paths it copied to a [`VersionControl`] implementation
//! to stage and commit them. [`Git`] is the real one; tests substitute their own.

use std::path::{Path, PathBuf};

pub use sync_git::CommitInfo;

/// Staging and committing in the sync repository.
pub trait VersionControl: Send + Sync {
    /// Stage `paths` (absolute, inside `repo_root`).
    fn stage(&self, paths: &[PathBuf], repo_root: &Path) -> sync_git::Result<()>;

    /// Commit whatever is staged.
    fn commit(&self, message: &str, repo_root: &Path) -> sync_git::Result<CommitInfo>;
}

/// libgit2-backed version control.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

impl VersionControl for Git {
    fn stage(&self, paths: &[PathBuf], repo_root: &Path) -> sync_git::Result<()> {
        sync_git::stage(paths, repo_root)
    }

    fn commit(&self, message: &str, repo_root: &Path) -> sync_git::Result<CommitInfo> {
        sync_git::commit(message, repo_root)
    }
}

/// Commit message for a pull that copied `count` files.
pub fn commit_message(machine: &str, count: usize) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("Sync configs for {machine} ({count} {noun})")
}
