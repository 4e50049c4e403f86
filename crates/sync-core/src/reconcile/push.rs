//! Push: repo copies back onto the local machine

use super::{ChangePreview, Confirm, ConfirmMode, FileRecord, Reconciler, Reporter, replace_with_backup};
use crate::{LogicalFile, Outcome, Result, diff};

/// Options for a push run.
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Report what would change without writing or prompting
    pub dry_run: bool,
    /// Apply every change without asking
    pub yes: bool,
}

/// Totals and per-file outcomes of a push run.
#[derive(Debug, Clone, Default)]
pub struct PushReport {
    pub dry_run: bool,
    /// Files written, or that would be written in a dry run
    pub pushed: usize,
    pub unchanged: usize,
    /// Files skipped because the repo has no copy
    pub missing: usize,
    pub declined: usize,
    pub failed: usize,
    pub records: Vec<FileRecord>,
}

impl PushReport {
    /// Files left alone for any reason other than a failure.
    pub fn skipped(&self) -> usize {
        self.unchanged + self.missing + self.declined
    }

    fn add(&mut self, file: &LogicalFile, outcome: Outcome, reporter: &mut dyn Reporter) {
        match &outcome {
            Outcome::SkippedMissingSource => self.missing += 1,
            Outcome::SkippedIdentical => self.unchanged += 1,
            Outcome::SkippedDeclined => self.declined += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Copied | Outcome::WouldCopy | Outcome::BackedUpAndCopied { .. } => {
                self.pushed += 1
            }
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
    /// Write repo copies over local files, asking first unless told not to.
    ///
    /// An existing local file is always backed up before it is overwritten.
    /// Errors from `confirm` abort the run; file I/O failures do not.
    pub fn push(
        &self,
        files: &[LogicalFile],
        options: &PushOptions,
        confirm: &mut dyn Confirm,
        reporter: &mut dyn Reporter,
    ) -> Result<PushReport> {
        tracing::debug!(files = files.len(), dry_run = options.dry_run, yes = options.yes, "Starting push");

        let mut report = PushReport {
            dry_run: options.dry_run,
            ..Default::default()
        };
        let mut mode = ConfirmMode::new(options.yes);

        for file in files {
            let outcome = push_one(file, options, &mut mode, confirm, reporter)?;
            report.add(file, outcome, reporter);
        }

        Ok(report)
    }
}

fn push_one(
    file: &LogicalFile,
    options: &PushOptions,
    mode: &mut ConfirmMode,
    confirm: &mut dyn Confirm,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    if !sync_fs::exists(&file.repo_path) {
        return Ok(Outcome::SkippedMissingSource);
    }

    let local_exists = sync_fs::exists(&file.local_path);
    if local_exists && sync_fs::identical(&file.local_path, &file.repo_path) {
        return Ok(Outcome::SkippedIdentical);
    }

    let preview = if local_exists {
        ChangePreview::diff(diff::unified_diff(&file.local_path, &file.repo_path))
    } else {
        ChangePreview::creates()
    };
    reporter.preview(file, &preview);

    if options.dry_run {
        return Ok(Outcome::WouldCopy);
    }

    if !mode.proceed(confirm, file, &preview)? {
        return Ok(Outcome::SkippedDeclined);
    }

    let outcome = match replace_with_backup(&file.repo_path, &file.local_path) {
        Ok(Some(backup)) => Outcome::BackedUpAndCopied { backup },
        Ok(None) => Outcome::Copied,
        Err(e) => {
            tracing::warn!(label = %file.label, error = %e, "Push failed");
            return Ok(Outcome::Failed {
                reason: e.to_string(),
            });
        }
    };
    tracing::info!(label = %file.label, "Pushed file to local");
    Ok(outcome)
}
