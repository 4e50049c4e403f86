//! Status queries over a machine's full catalog

use pretty_assertions::assert_eq;
use sync_core::catalog;
use sync_core::{FileStatus, LogicalFile, Reconciler, Side, StatusOptions, SyncConfig, SyncContext};
use sync_test_utils::{TEST_MACHINE, TestEnv};

fn files(env: &TestEnv) -> Vec<LogicalFile> {
    let ctx = SyncContext::new(env.repo_root());
    let config = SyncConfig::load(&ctx).unwrap();
    catalog::files_for(&ctx, TEST_MACHINE, config.require_machine(TEST_MACHINE).unwrap())
}

fn reconciler(env: &TestEnv) -> Reconciler {
    Reconciler::new(SyncContext::new(env.repo_root()))
}

#[test]
fn test_status_counts_every_kind() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_local("CLAUDE.md", "same\n");
    env.write_repo("global/CLAUDE.md", "same\n");
    env.write_local("settings.json", "{\"a\": 1}\n");
    env.write_repo("global/settings.json", "{\"a\": 2}\n");
    env.write_local("settings.local.json", "{}\n");
    env.write_repo("global/plugins/installed_plugins.json", "[]\n");

    let report = reconciler(&env).status(&files(&env), &StatusOptions::default());

    assert_eq!(report.count(FileStatus::Identical), 1);
    assert_eq!(report.count(FileStatus::Modified), 1);
    assert_eq!(report.count(FileStatus::LocalOnly), 1);
    assert_eq!(report.count(FileStatus::RepoOnly), 1);
    assert_eq!(report.count(FileStatus::MissingBoth), 1);
    assert_eq!(report.hidden, 1);
    assert_eq!(report.entries.len(), 4);
}

#[test]
fn test_missing_both_hidden_but_counted() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);

    let hidden = reconciler(&env).status(&files(&env), &StatusOptions::default());
    assert!(hidden.entries.is_empty());
    assert_eq!(hidden.hidden, 5);
    assert_eq!(hidden.count(FileStatus::MissingBoth), 5);

    let shown = reconciler(&env).status(
        &files(&env),
        &StatusOptions {
            show_missing: true,
            include_diff: false,
        },
    );
    assert_eq!(shown.entries.len(), 5);
    assert_eq!(shown.hidden, 0);
    assert_eq!(shown.count(FileStatus::MissingBoth), 5);
}

#[test]
fn test_modified_entry_diff_only_when_requested() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_local("CLAUDE.md", "# Local edit\n");
    env.write_repo("global/CLAUDE.md", "# Repo version\n");

    let plain = reconciler(&env).status(&files(&env), &StatusOptions::default());
    assert_eq!(plain.entries[0].status, FileStatus::Modified);
    assert_eq!(plain.entries[0].diff, None);

    let verbose = reconciler(&env).status(
        &files(&env),
        &StatusOptions {
            show_missing: false,
            include_diff: true,
        },
    );
    let diff = verbose.entries[0].diff.as_deref().unwrap();
    assert!(diff.contains("-# Repo version"));
    assert!(diff.contains("+# Local edit"));
}

#[test]
fn test_modified_entry_reports_newer_side() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    let local = env.write_local("CLAUDE.md", "local\n");
    let repo = env.write_repo("global/CLAUDE.md", "repo\n");
    let earlier = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
    std::fs::File::options()
        .write(true)
        .open(&repo)
        .unwrap()
        .set_modified(earlier)
        .unwrap();

    let report = reconciler(&env).status(&files(&env), &StatusOptions::default());

    assert_eq!(report.entries[0].newer_side, Some(Side::Local));
    assert!(local.exists());
}

#[test]
fn test_status_never_writes() {
    let env = TestEnv::new();
    env.write_machine_config(&[("app", env.project_dir())]);
    env.write_local("CLAUDE.md", "local only\n");
    env.write_repo("projects/app/CLAUDE.md", "repo only\n");

    reconciler(&env).status(&files(&env), &StatusOptions::default());

    assert!(!env.repo_file("global/CLAUDE.md").exists());
    assert!(!env.project_dir().join("CLAUDE.md").exists());
}
