//! Reconciliation policy
//!
//! The [`Reconciler`] walks a list of logical files in order and decides per
//! file whether to copy, skip or ask. It never prints; everything a user would
//! see goes through a [`Reporter`], and push confirmations go through a
//! [`Confirm`] implementation.

mod pull;
mod push;
mod status;

pub use pull::{PullOptions, PullReport};
pub use push::{PushOptions, PushReport};
pub use status::{StatusOptions, StatusReport};

use std::fs;
use std::path::{Path, PathBuf};

use crate::vcs::{Git, VersionControl};
use crate::{LogicalFile, Outcome, Result, SyncContext};

/// What would change if a file were copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePreview {
    /// Unified diff of destination against source, when the destination exists
    pub diff: Option<String>,
    /// The destination does not exist yet and would be created
    pub creates: bool,
}

impl ChangePreview {
    pub fn diff(diff: String) -> Self {
        Self {
            diff: Some(diff),
            creates: false,
        }
    }

    pub fn creates() -> Self {
        Self {
            diff: None,
            creates: true,
        }
    }
}

/// Per-file result of a pull or push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file: LogicalFile,
    pub outcome: Outcome,
}

/// Receives progress from a reconciliation run.
///
/// Both methods default to doing nothing.
pub trait Reporter {
    /// A change is about to be applied, or would be in a dry run.
    fn preview(&mut self, _file: &LogicalFile, _preview: &ChangePreview) {}

    /// A file has been dealt with.
    fn record(&mut self, _record: &FileRecord) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Operator answer to a push confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
    /// Accept this and every remaining change in the run
    AcceptAll,
}

/// Asks whether one change should be applied.
pub trait Confirm {
    fn confirm(&mut self, file: &LogicalFile, preview: &ChangePreview) -> Result<Decision>;
}

/// Confirmation state of a push run.
///
/// Starts in `Prompting` unless the run was started with auto-confirm. An
/// `AcceptAll` answer latches `AutoConfirm` for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    Prompting,
    AutoConfirm,
}

impl ConfirmMode {
    pub fn new(auto_confirm: bool) -> Self {
        if auto_confirm {
            Self::AutoConfirm
        } else {
            Self::Prompting
        }
    }

    /// Whether to go ahead with this change, asking `confirm` if needed.
    pub fn proceed(
        &mut self,
        confirm: &mut dyn Confirm,
        file: &LogicalFile,
        preview: &ChangePreview,
    ) -> Result<bool> {
        if *self == Self::AutoConfirm {
            return Ok(true);
        }

        match confirm.confirm(file, preview)? {
            Decision::Accept => Ok(true),
            Decision::Decline => Ok(false),
            Decision::AcceptAll => {
                tracing::debug!(label = %file.label, "Auto-confirming remaining changes");
                *self = Self::AutoConfirm;
                Ok(true)
            }
        }
    }
}

/// Overwrite `dest` with `src`, moving any existing `dest` aside first.
///
/// The copy only happens once the backup succeeded. If the copy then fails,
/// the backup is moved back so `dest` keeps its previous content.
pub fn replace_with_backup(src: &Path, dest: &Path) -> sync_fs::Result<Option<PathBuf>> {
    let backup = sync_fs::backup(dest)?;

    if let Err(e) = sync_fs::copy_creating_dirs(src, dest) {
        if let Some(backup) = &backup
            && let Err(restore) = fs::rename(backup, dest)
        {
            tracing::warn!(
                backup = %backup.display(),
                dest = %dest.display(),
                error = %restore,
                "Could not restore backup after failed copy"
            );
        }
        return Err(e);
    }

    Ok(backup)
}

/// Runs pull, push and status over a list of logical files.
pub struct Reconciler {
    ctx: SyncContext,
    vcs: Box<dyn VersionControl>,
}

impl Reconciler {
    /// Reconciler committing through git.
    pub fn new(ctx: SyncContext) -> Self {
        Self::with_vcs(ctx, Box::new(Git))
    }

    pub fn with_vcs(ctx: SyncContext, vcs: Box<dyn VersionControl>) -> Self {
        Self { ctx, vcs }
    }

    pub fn context(&self) -> &SyncContext {
        &self.ctx
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}
