//! Reconciliation engine for config-sync
//!
//! This crate decides, for every logical config file of a machine, how its
//! local copy and its copy in the sync repository relate, and carries out the
//! copies that pull and push call for:
//!
//! - **Catalog**: the fixed list of logical files per machine and project
//! - **Diff engine**: status, unified diff and newer side of one file
//! - **Reconciler**: pull (local to repo), push (repo to local) and status runs
//! - **Registry**: the `sync.config.json` machine/project table
//!
//! # Architecture
//!
//! ```text
//!                    CLI
//!                     |
//!                 sync-core
//!                     |
//!          +----------+----------+
//!          |                     |
//!       sync-fs              sync-git
//! ```
//!
//! # Example
//!
//! ```ignore
//! use sync_core::{FileFilter, NullReporter, PullOptions, Reconciler, SyncConfig, SyncContext, catalog};
//!
//! let ctx = SyncContext::new("/path/to/sync-repo");
//! let config = SyncConfig::load(&ctx)?;
//! let machine = config.require_machine("laptop")?;
//! let files = FileFilter::default().apply(catalog::files_for(&ctx, "laptop", machine))?;
//! let report = Reconciler::new(ctx).pull("laptop", &files, &PullOptions::default(), &mut NullReporter)?;
//! println!("{} copied", report.copied);
//! ```

pub mod backups;
pub mod catalog;
pub mod context;
pub mod diff;
pub mod error;
pub mod filter;
pub mod model;
pub mod reconcile;
pub mod registry;
pub mod vcs;

pub use backups::{CleanReport, delete_backups, find_backups};
pub use context::{SyncContext, UserPreferences, current_machine_name};
pub use diff::{DIFF_UNAVAILABLE, compare, status, unified_diff};
pub use error::{Error, Result};
pub use filter::FileFilter;
pub use model::{ComparisonResult, FileStatus, LogicalFile, Outcome, Side};
pub use reconcile::{
    ChangePreview, Confirm, ConfirmMode, Decision, FileRecord, NullReporter, PullOptions,
    PullReport, PushOptions, PushReport, Reconciler, Reporter, StatusOptions, StatusReport,
    replace_with_backup,
};
pub use registry::{MachineConfig, SyncConfig, validate_project_name};
pub use vcs::{CommitInfo, Git, VersionControl};
