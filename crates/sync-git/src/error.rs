//! Error types for sync-git

use std::path::PathBuf;

/// Result type for sync-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sync-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository at {path} has no working directory")]
    BareRepository { path: PathBuf },

    #[error("{path} is outside the repository at {root}")]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error("Could not resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No git identity configured. Set user.name and user.email in git config.")]
    MissingIdentity,
}
