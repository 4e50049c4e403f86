//! Data model shared by the catalog, the diff engine and the reconciler

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One trackable configuration artifact and where it lives on each side.
///
/// The label is unique within one machine's file set and is what users see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalFile {
    /// Display label like `global/CLAUDE.md` or `projects/app/CLAUDE.md`
    pub label: String,
    /// Absolute path on the local machine
    pub local_path: PathBuf,
    /// Path inside the sync repository
    pub repo_path: PathBuf,
}

impl LogicalFile {
    pub fn new(
        label: impl Into<String>,
        local_path: impl Into<PathBuf>,
        repo_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            label: label.into(),
            local_path: local_path.into(),
            repo_path: repo_path.into(),
        }
    }
}

/// Synchronisation status of a logical file, derived from disk on every query.
///
/// Variant order is the order summaries are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileStatus {
    Identical,
    Modified,
    LocalOnly,
    RepoOnly,
    MissingBoth,
}

impl FileStatus {
    /// Every status, in summary order.
    pub const ALL: [FileStatus; 5] = [
        Self::Identical,
        Self::Modified,
        Self::LocalOnly,
        Self::RepoOnly,
        Self::MissingBoth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Modified => "modified",
            Self::LocalOnly => "local-only",
            Self::RepoOnly => "repo-only",
            Self::MissingBoth => "missing-both",
        }
    }

    /// Longer human description used in summaries.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Modified => "modified",
            Self::LocalOnly => "local only (not in repo)",
            Self::RepoOnly => "repo only (not on disk)",
            Self::MissingBoth => "missing everywhere",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a logical file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Local,
    Repo,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Repo => f.write_str("repo"),
        }
    }
}

/// Result of comparing both sides of one logical file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub file: LogicalFile,
    pub status: FileStatus,
    /// Unified diff, repo as "from" and local as "to". Only for `Modified`.
    pub diff: Option<String>,
    /// Side with the later modification time. Only for `Modified`, and only
    /// when both times could be read.
    pub newer_side: Option<Side>,
}

/// What a pull or push did with one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    /// Destination written
    Copied,
    /// Dry run: destination would have been written
    WouldCopy,
    /// Both sides already hold the same bytes
    SkippedIdentical,
    /// Nothing to copy from
    SkippedMissingSource,
    /// Operator declined the change
    SkippedDeclined,
    /// Previous destination moved to `backup`, then destination written
    BackedUpAndCopied { backup: PathBuf },
    /// I/O failure for this file; the run carried on
    Failed { reason: String },
}

impl Outcome {
    /// Whether the destination was (or in a dry run would be) written.
    pub fn is_copy(&self) -> bool {
        matches!(
            self,
            Self::Copied | Self::WouldCopy | Self::BackedUpAndCopied { .. }
        )
    }

    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::SkippedIdentical | Self::SkippedMissingSource | Self::SkippedDeclined
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_order_matches_summary_order() {
        let mut sorted = FileStatus::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, FileStatus::ALL.to_vec());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&FileStatus::MissingBoth).unwrap();
        assert_eq!(json, "\"missing-both\"");
    }

    #[test]
    fn outcome_classification() {
        assert!(Outcome::WouldCopy.is_copy());
        assert!(Outcome::BackedUpAndCopied { backup: PathBuf::from("x") }.is_copy());
        assert!(Outcome::SkippedDeclined.is_skip());
        assert!(!Outcome::Failed { reason: "boom".into() }.is_skip());
        assert!(Outcome::Failed { reason: "boom".into() }.is_failure());
    }
}
