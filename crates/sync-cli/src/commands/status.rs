//! Status command: drift between local and repo configs

use colored::Colorize;
use sync_core::{ComparisonResult, FileFilter, FileStatus, Reconciler, StatusOptions};

use super::Session;
use crate::error::Result;
use crate::output::print_diff;

/// Five-column marker shown before each label.
pub fn status_icon(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Identical => "  =  ",
        FileStatus::Modified => " [M] ",
        FileStatus::LocalOnly => " [L] ",
        FileStatus::RepoOnly => " [R] ",
        FileStatus::MissingBoth => " [?] ",
    }
}

/// Listing line for one entry, without colour.
pub fn status_line(entry: &ComparisonResult) -> String {
    let suffix = match entry.newer_side {
        Some(side) if entry.status == FileStatus::Modified => format!(" ({side} newer)"),
        _ => String::new(),
    };
    format!("{} {}{suffix}", status_icon(entry.status), entry.file.label)
}

/// Run the status command
pub fn run_status(session: &Session, filter: FileFilter, options: StatusOptions) -> Result<()> {
    filter.validate()?;
    let files = filter.apply(session.files()?)?;

    let report = Reconciler::new(session.ctx.clone()).status(&files, &options);

    println!("Status for machine: {}\n", session.machine.cyan());

    for entry in &report.entries {
        let line = status_line(entry);
        match entry.status {
            FileStatus::Identical => println!("{}", line.dimmed()),
            FileStatus::Modified => println!("{}", line.yellow()),
            FileStatus::LocalOnly | FileStatus::RepoOnly => println!("{}", line.cyan()),
            FileStatus::MissingBoth => println!("{}", line.dimmed()),
        }

        if let Some(diff) = &entry.diff
            && !diff.is_empty()
        {
            print_diff(diff);
        }
    }

    println!("\n{}", "Summary:".bold());
    for status in FileStatus::ALL {
        let count = report.count(status);
        if count > 0 {
            println!("  {count} {}", status.description());
        }
    }

    if report.hidden > 0 {
        println!(
            "\n  ({} missing-both hidden, use --all to show)",
            report.hidden
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_core::{LogicalFile, Side};

    fn entry(status: FileStatus, newer_side: Option<Side>) -> ComparisonResult {
        ComparisonResult {
            file: LogicalFile::new("global/settings.json", "/l", "/r"),
            status,
            diff: None,
            newer_side,
        }
    }

    #[test]
    fn test_status_line_marks_newer_side() {
        assert_eq!(
            status_line(&entry(FileStatus::Modified, Some(Side::Local))),
            " [M]  global/settings.json (local newer)"
        );
        assert_eq!(
            status_line(&entry(FileStatus::Modified, None)),
            " [M]  global/settings.json"
        );
    }

    #[test]
    fn test_icons_share_width() {
        for status in FileStatus::ALL {
            assert_eq!(status_icon(status).len(), 5);
        }
        assert_eq!(
            status_line(&entry(FileStatus::Identical, None)),
            "  =   global/settings.json"
        );
    }
}
