//! Error types for sync-core

use std::path::PathBuf;

/// Result type for sync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No sync repository was given on the command line, in the environment
    /// or in the user preference file
    #[error(
        "sync repo path required. Use --repo <path>, set CLAUDE_SYNC_REPO env var,\nor run: cc-config-sync config set-repo <path>"
    )]
    RepoNotConfigured,

    /// A persisted JSON file exists but cannot be parsed
    #[error("{path} is malformed: {message}. Please fix or delete it.")]
    MalformedConfig { path: PathBuf, message: String },

    /// The current machine has no entry in sync.config.json
    #[error("No configuration found for machine \"{machine}\". Run `cc-config-sync init` first.")]
    MachineNotRegistered { machine: String },

    /// A named project is not registered for the machine
    #[error(
        "Project \"{name}\" not found for machine \"{machine}\".\nAvailable projects: {available}"
    )]
    ProjectNotFound {
        name: String,
        machine: String,
        available: String,
    },

    /// Rename target already in use
    #[error("Project \"{name}\" already exists for machine \"{machine}\". Choose a different name.")]
    ProjectExists { name: String, machine: String },

    /// Project name that would escape its directory or is empty
    #[error(
        "Invalid project name \"{name}\". Names must be non-empty and must not contain '/', '\\', or '..'."
    )]
    InvalidProjectName { name: String },

    /// `--project` and `--global-only` given together
    #[error("--project and --global-only cannot be used together.")]
    ConflictingFilters,

    /// Project filter selected nothing
    #[error("no config files found for project \"{project}\".")]
    NoMatchingFiles { project: String },

    /// Rename of a repo project directory would clobber an existing one
    #[error("Cannot rename repo directory: {path} already exists. Please resolve manually.")]
    RepoDirExists { path: PathBuf },

    /// Hostname lookup failed
    #[error("Could not determine machine name: {0}")]
    Hostname(#[source] std::io::Error),

    /// Home directory lookup failed
    #[error("Could not determine the home directory")]
    NoHomeDir,

    /// Staging or committing after a pull failed
    #[error("Commit failed: {0}")]
    Commit(#[source] sync_git::Error),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from sync-fs
    #[error(transparent)]
    Fs(#[from] sync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
