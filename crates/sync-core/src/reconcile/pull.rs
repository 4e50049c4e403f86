//! Pull: local files into the sync repository

use std::path::PathBuf;

use super::{ChangePreview, FileRecord, Reconciler, Reporter};
use crate::vcs::{CommitInfo, commit_message};
use crate::{Error, LogicalFile, Outcome, Result, diff};

/// Options for a pull run.
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Report what would be copied without writing anything
    pub dry_run: bool,
}

/// Totals and per-file outcomes of a pull run.
#[derive(Debug, Clone, Default)]
pub struct PullReport {
    pub dry_run: bool,
    /// Files copied, or that would be copied in a dry run
    pub copied: usize,
    pub unchanged: usize,
    /// Files skipped because they do not exist locally
    pub missing: usize,
    pub failed: usize,
    pub records: Vec<FileRecord>,
    /// Repo paths actually written, in catalog order
    pub copied_repo_paths: Vec<PathBuf>,
}

impl PullReport {
    fn add(&mut self, file: &LogicalFile, outcome: Outcome, reporter: &mut dyn Reporter) {
        match &outcome {
            Outcome::SkippedMissingSource => self.missing += 1,
            Outcome::SkippedIdentical => self.unchanged += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Copied | Outcome::WouldCopy | Outcome::BackedUpAndCopied { .. } => {
                self.copied += 1
            }
            Outcome::SkippedDeclined => {}
        }

        let record = FileRecord {
            file: file.clone(),
            outcome,
        };
        reporter.record(&record);
        self.records.push(record);
    }
}

impl Reconciler {
    /// Copy every local file that differs from its repo copy into the repo.
    ///
    /// Files are processed in order. A failure on one file is recorded and
    /// the run continues. Committing is a separate step, see
    /// [`Reconciler::commit_pulled`].
    pub fn pull(
        &self,
        machine: &str,
        files: &[LogicalFile],
        options: &PullOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<PullReport> {
        tracing::debug!(machine, files = files.len(), dry_run = options.dry_run, "Starting pull");

        let mut report = PullReport {
            dry_run: options.dry_run,
            ..Default::default()
        };

        for file in files {
            let outcome = self.pull_one(file, options, reporter);
            if matches!(outcome, Outcome::Copied) {
                report.copied_repo_paths.push(file.repo_path.clone());
            }
            report.add(file, outcome, reporter);
        }

        Ok(report)
    }

    /// Stage and commit the repo paths a pull wrote.
    ///
    /// Returns `None` without touching git for a dry run or when nothing was
    /// copied.
    pub fn commit_pulled(&self, machine: &str, report: &PullReport) -> Result<Option<CommitInfo>> {
        if report.dry_run || report.copied_repo_paths.is_empty() {
            return Ok(None);
        }

        let root = self.ctx.repo_root();
        let message = commit_message(machine, report.copied_repo_paths.len());

        self.vcs
            .stage(&report.copied_repo_paths, root)
            .map_err(Error::Commit)?;
        let info = self.vcs.commit(&message, root).map_err(Error::Commit)?;
        tracing::info!(machine, hash = %info.hash, files = report.copied_repo_paths.len(), "Committed pulled files");
        Ok(Some(info))
    }

    fn pull_one(&self, file: &LogicalFile, options: &PullOptions, reporter: &mut dyn Reporter) -> Outcome {
        if !sync_fs::exists(&file.local_path) {
            return Outcome::SkippedMissingSource;
        }

        let repo_exists = sync_fs::exists(&file.repo_path);
        if repo_exists && sync_fs::identical(&file.local_path, &file.repo_path) {
            return Outcome::SkippedIdentical;
        }

        if options.dry_run {
            if repo_exists {
                let diff = diff::unified_diff(&file.repo_path, &file.local_path);
                reporter.preview(file, &ChangePreview::diff(diff));
            }
            return Outcome::WouldCopy;
        }

        match sync_fs::copy_creating_dirs(&file.local_path, &file.repo_path) {
            Ok(()) => {
                tracing::info!(label = %file.label, "Pulled file into repo");
                Outcome::Copied
            }
            Err(e) => {
                tracing::warn!(label = %file.label, error = %e, "Pull failed");
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
