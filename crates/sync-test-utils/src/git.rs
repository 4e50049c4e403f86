//! Git repository fixtures.

use std::path::Path;

/// Initialises a real git repository using `git2` with a local identity
/// configured, so commits made by the code under test succeed.
///
/// The repository has no commits.
///
/// # Panics
/// Panics if the repository cannot be created or configured.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    });

    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("real_git_repo: failed to open config: {e}"));
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();
    }

    repo
}

/// Number of commits reachable from HEAD, zero on an unborn branch.
///
/// # Panics
/// Panics if the repository cannot be opened or walked.
pub fn commit_count(path: &Path) -> usize {
    let repo = git2::Repository::open(path).expect("commit_count: failed to open repository");
    if repo.head().is_err() {
        return 0;
    }
    let mut walk = repo.revwalk().expect("commit_count: revwalk");
    walk.push_head().expect("commit_count: push_head");
    walk.count()
}

/// Summary line of the commit HEAD points to.
///
/// # Panics
/// Panics if HEAD does not resolve to a commit.
pub fn head_summary(path: &Path) -> String {
    let repo = git2::Repository::open(path).expect("head_summary: failed to open repository");
    let commit = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .expect("head_summary: HEAD is not a commit");
    commit.summary().unwrap_or("").to_string()
}

/// Paths recorded in the tree of the HEAD commit, relative to the work dir.
///
/// # Panics
/// Panics if HEAD does not resolve to a commit.
pub fn head_tree_paths(path: &Path) -> Vec<String> {
    let repo = git2::Repository::open(path).expect("head_tree_paths: failed to open repository");
    let tree = repo
        .head()
        .and_then(|h| h.peel_to_tree())
        .expect("head_tree_paths: HEAD has no tree");

    let mut paths = Vec::new();
    tree.walk(git2::TreeWalkMode::PreOrder, |dir, entry| {
        if entry.kind() == Some(git2::ObjectType::Blob) {
            paths.push(format!("{}{}", dir, entry.name().unwrap_or("")));
        }
        git2::TreeWalkResult::Ok
    })
    .expect("head_tree_paths: walk failed");
    paths.sort();
    paths
}
