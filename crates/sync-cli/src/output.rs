//! Terminal rendering of reconciliation progress

use colored::Colorize;
use sync_core::{ChangePreview, FileRecord, LogicalFile, Outcome, Reporter};

/// Which way files are flowing, for wording per-file lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Push,
}

/// Prints one line per file as a run progresses.
#[derive(Debug)]
pub struct TerminalReporter {
    direction: Direction,
}

impl TerminalReporter {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Reporter for TerminalReporter {
    fn preview(&mut self, file: &LogicalFile, preview: &ChangePreview) {
        match (&preview.diff, self.direction) {
            (Some(diff), Direction::Pull) => {
                println!("\n--- {} ---", file.label.bold());
                print_diff_or_hint(diff);
            }
            (Some(diff), Direction::Push) => {
                println!("\n--- Changes for {} ---", file.label.bold());
                print_diff_or_hint(diff);
            }
            (None, _) if preview.creates => {
                println!("\n  {}   {} (will be created)", "new".green(), file.label);
            }
            (None, _) => {}
        }
    }

    fn record(&mut self, record: &FileRecord) {
        for line in outcome_lines(self.direction, record) {
            println!("{line}");
        }
    }
}

/// Lines printed for one file, without colour codes when colour is off.
pub fn outcome_lines(direction: Direction, record: &FileRecord) -> Vec<String> {
    let label = &record.file.label;
    let verb = match direction {
        Direction::Pull => "pull",
        Direction::Push => "push",
    };

    match (&record.outcome, direction) {
        (Outcome::SkippedMissingSource, Direction::Pull) => {
            vec![format!("  {}  {label} (not found locally)", "skip".dimmed())]
        }
        (Outcome::SkippedMissingSource, Direction::Push) => {
            vec![format!("  {}  {label} (not in repo)", "skip".dimmed())]
        }
        (Outcome::SkippedIdentical, _) => vec![format!("  {}  {label}", "same".dimmed())],
        (Outcome::SkippedDeclined, _) => vec![format!("  {}  {label} (declined)", "skip".yellow())],
        (Outcome::WouldCopy, Direction::Pull) => {
            vec![format!("  {}  {label}", "would copy".cyan())]
        }
        (Outcome::WouldCopy, Direction::Push) => {
            vec![format!("  {}  {label}", "would push".cyan())]
        }
        (Outcome::Copied, _) => vec![format!("  {}  {label}", verb.green())],
        (Outcome::BackedUpAndCopied { backup }, _) => vec![
            format!("  {} \u{2192} {}", "backup".yellow(), backup.display()),
            format!("  {}  {label}", verb.green()),
        ],
        (Outcome::Failed { reason }, _) => {
            vec![format!("  {}  {label}: {reason}", "error".red().bold())]
        }
    }
}

fn print_diff_or_hint(diff: &str) {
    if diff.is_empty() {
        println!("(files differ but diff unavailable)");
    } else {
        print_diff(diff);
    }
}

/// Print a unified diff with added lines green and removed lines red.
pub fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(outcome: Outcome) -> FileRecord {
        FileRecord {
            file: LogicalFile::new("global/CLAUDE.md", "/l/CLAUDE.md", "/r/CLAUDE.md"),
            outcome,
        }
    }

    #[test]
    fn test_skip_wording_depends_on_direction() {
        colored::control::set_override(false);
        assert_eq!(
            outcome_lines(Direction::Pull, &record(Outcome::SkippedMissingSource)),
            vec!["  skip  global/CLAUDE.md (not found locally)"]
        );
        assert_eq!(
            outcome_lines(Direction::Push, &record(Outcome::SkippedMissingSource)),
            vec!["  skip  global/CLAUDE.md (not in repo)"]
        );
    }

    #[test]
    fn test_backup_line_precedes_push_line() {
        colored::control::set_override(false);
        let lines = outcome_lines(
            Direction::Push,
            &record(Outcome::BackedUpAndCopied {
                backup: PathBuf::from("/l/CLAUDE.md.backup-2026-10-18T09-15-02-123Z"),
            }),
        );
        assert_eq!(
            lines,
            vec![
                "  backup \u{2192} /l/CLAUDE.md.backup-2026-10-18T09-15-02-123Z",
                "  push  global/CLAUDE.md",
            ]
        );
    }

    #[test]
    fn test_failure_line_carries_reason() {
        colored::control::set_override(false);
        let lines = outcome_lines(
            Direction::Pull,
            &record(Outcome::Failed {
                reason: "permission denied".into(),
            }),
        );
        assert_eq!(lines, vec!["  error  global/CLAUDE.md: permission denied"]);
    }
}
