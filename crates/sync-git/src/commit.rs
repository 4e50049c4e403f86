//! Recording the staged index as a commit.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::{Error, Result};

/// Information about a created commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub summary: String,
}

/// Commit the current index of the repository containing `repo_root` on HEAD.
///
/// Works on an unborn branch, in which case the commit has no parents.
/// The author and committer come from the repository's git configuration.
pub fn commit(message: &str, repo_root: &Path) -> Result<CommitInfo> {
    let repo = Repository::discover(repo_root)?;
    let signature = repo.signature().map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::MissingIdentity,
        _ => Error::Git(e),
    })?;

    let mut index = repo.index()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
        Err(e) => return Err(e.into()),
    };
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;

    let info = CommitInfo {
        hash: format!("{:.7}", oid),
        summary: message.lines().next().unwrap_or("").to_string(),
    };
    tracing::info!(hash = %info.hash, summary = %info.summary, "Created commit");

    Ok(info)
}
