//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use sync_core::FileFilter;

/// cc-config-sync - Sync Claude Code configurations across machines
#[derive(Parser, Debug)]
#[command(name = "cc-config-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the sync repo
    #[arg(long, global = true, env = "CLAUDE_SYNC_REPO", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Machine name to act as (defaults to the hostname)
    #[arg(long, global = true, env = "CLAUDE_SYNC_MACHINE", hide = true)]
    pub machine: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Project / global selection shared by pull, push and status
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only include configs for a specific project
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Only include global configs
    #[arg(long)]
    pub global_only: bool,
}

impl From<FilterArgs> for FileFilter {
    fn from(args: FilterArgs) -> Self {
        FileFilter::new(args.project, args.global_only)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy local configs into the repo
    Pull {
        #[command(flatten)]
        filter: FilterArgs,

        /// Show what would be copied without copying
        #[arg(long)]
        dry_run: bool,

        /// Git add and commit pulled files
        #[arg(long)]
        commit: bool,
    },

    /// Copy repo configs to the local machine
    ///
    /// Every overwritten local file is first renamed to
    /// `<file>.backup-<timestamp>`.
    Push {
        #[command(flatten)]
        filter: FilterArgs,

        /// Apply all changes without prompting
        #[arg(short, long)]
        yes: bool,

        /// Show what would be applied without copying files or creating backups
        #[arg(long)]
        dry_run: bool,
    },

    /// Show differences between local and repo configs
    Status {
        /// Show diffs for modified files
        #[arg(short, long)]
        diff: bool,

        /// Show all entries including missing-both
        #[arg(short, long)]
        all: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show all registered paths
    List,

    /// Interactive setup for the current machine
    Init,

    /// Add a project to track
    AddProject {
        /// Project name
        name: String,

        /// Path to the project root
        path: PathBuf,
    },

    /// Remove a project from tracking
    RemoveProject {
        /// Project name
        name: String,
    },

    /// Rename a tracked project
    RenameProject {
        /// Current project name
        old_name: String,

        /// New project name
        new_name: String,
    },

    /// Find and delete backup files created by push
    CleanBackups {
        /// Delete without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage cc-config-sync settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   cc-config-sync completions bash > ~/.local/share/bash-completion/completions/cc-config-sync
    ///   cc-config-sync completions zsh > ~/.zfunc/_cc-config-sync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command works without a sync repo.
    pub fn needs_repo(&self) -> bool {
        !matches!(self, Self::Config { .. } | Self::Completions { .. })
    }
}

/// `config` subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Set the default sync repo path
    SetRepo {
        /// Path to the sync repo
        path: PathBuf,
    },

    /// Show current config
    Show,
}
