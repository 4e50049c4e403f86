//! Status: read-only comparison of every file

use std::collections::BTreeMap;

use super::Reconciler;
use crate::{ComparisonResult, FileStatus, LogicalFile, diff};

/// Options for a status query.
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    /// List files missing on both sides too
    pub show_missing: bool,
    /// Keep diffs of modified files in the entries
    pub include_diff: bool,
}

/// Result of a status query.
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    /// Entries to list, in catalog order
    pub entries: Vec<ComparisonResult>,
    /// Per-status totals over every file, listed or not
    pub counts: BTreeMap<FileStatus, usize>,
    /// Missing-both files left out of `entries`
    pub hidden: usize,
}

impl StatusReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}

impl Reconciler {
    /// Compare every file. Never writes.
    pub fn status(&self, files: &[LogicalFile], options: &StatusOptions) -> StatusReport {
        let mut report = StatusReport::default();

        for file in files {
            let mut result = diff::compare(file);
            *report.counts.entry(result.status).or_insert(0) += 1;

            if result.status == FileStatus::MissingBoth && !options.show_missing {
                report.hidden += 1;
                continue;
            }
            if !options.include_diff {
                result.diff = None;
            }
            report.entries.push(result);
        }

        tracing::debug!(
            files = files.len(),
            listed = report.entries.len(),
            hidden = report.hidden,
            "Computed status"
        );
        report
    }
}
