//! Push runs: confirmation, backups and dry runs

use pretty_assertions::assert_eq;
use sync_core::catalog;
use sync_core::{
    ChangePreview, Confirm, Decision, FileFilter, LogicalFile, NullReporter, Outcome, PushOptions,
    PushReport, Reconciler, Reporter, Result, SyncConfig, SyncContext,
};
use sync_test_utils::env::read;
use sync_test_utils::{TEST_MACHINE, TestEnv};

/// Answers prompts from a script and remembers which labels were asked about.
struct Scripted {
    answers: Vec<Decision>,
    asked: Vec<String>,
}

impl Scripted {
    fn new(answers: &[Decision]) -> Self {
        Self {
            answers: answers.to_vec(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for Scripted {
    fn confirm(&mut self, file: &LogicalFile, _preview: &ChangePreview) -> Result<Decision> {
        self.asked.push(file.label.clone());
        Ok(self.answers.remove(0))
    }
}

#[derive(Default)]
struct Previews(Vec<(String, ChangePreview)>);

impl Reporter for Previews {
    fn preview(&mut self, file: &LogicalFile, preview: &ChangePreview) {
        self.0.push((file.label.clone(), preview.clone()));
    }
}

fn global_files(env: &TestEnv) -> Vec<LogicalFile> {
    let ctx = SyncContext::new(env.repo_root());
    let config = SyncConfig::load(&ctx).unwrap();
    let files = catalog::files_for(&ctx, TEST_MACHINE, config.require_machine(TEST_MACHINE).unwrap());
    FileFilter::new(None, true).apply(files).unwrap()
}

fn push_with(env: &TestEnv, options: &PushOptions, confirm: &mut Scripted) -> PushReport {
    Reconciler::new(SyncContext::new(env.repo_root()))
        .push(&global_files(env), options, confirm, &mut NullReporter)
        .unwrap()
}

fn yes() -> PushOptions {
    PushOptions {
        dry_run: false,
        yes: true,
    }
}

#[test]
fn test_push_auto_confirm_creates_exactly_one_backup() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_local("settings.json", "{\"theme\": \"light\"}\n");
    env.write_repo("global/settings.json", "{\"theme\": \"dark\"}\n");

    let report = push_with(&env, &yes(), &mut Scripted::new(&[]));

    assert_eq!(report.pushed, 1);
    assert_eq!(read(&env.local_dir().join("settings.json")), "{\"theme\": \"dark\"}\n");

    let backups = env.backups_in(env.local_dir());
    assert_eq!(backups.len(), 1);
    assert_eq!(read(&backups[0]), "{\"theme\": \"light\"}\n");
    let name = backups[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("settings.json.backup-"), "got {name}");

    match &report.records[1].outcome {
        Outcome::BackedUpAndCopied { backup } => assert_eq!(backup, &backups[0]),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn test_push_creates_missing_local_file_without_backup() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_repo("global/plugins/installed_plugins.json", "[]\n");

    let report = push_with(&env, &yes(), &mut Scripted::new(&[]));

    assert_eq!(report.pushed, 1);
    assert_eq!(report.records[3].outcome, Outcome::Copied);
    assert_eq!(
        read(&env.local_dir().join("plugins/installed_plugins.json")),
        "[]\n"
    );
    assert!(env.backups_in(&env.local_dir().join("plugins")).is_empty());
}

#[test]
fn test_push_decline_leaves_both_sides_unchanged() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    let local = env.write_local("CLAUDE.md", "local\n");
    let repo = env.write_repo("global/CLAUDE.md", "repo\n");

    let mut confirm = Scripted::new(&[Decision::Decline]);
    let report = push_with(&env, &PushOptions::default(), &mut confirm);

    assert_eq!(report.declined, 1);
    assert_eq!(report.pushed, 0);
    assert_eq!(report.records[0].outcome, Outcome::SkippedDeclined);
    assert_eq!(read(&local), "local\n");
    assert_eq!(read(&repo), "repo\n");
    assert!(env.backups_in(env.local_dir()).is_empty());
}

#[test]
fn test_push_accept_all_stops_prompting() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_repo("global/CLAUDE.md", "a\n");
    env.write_repo("global/settings.json", "{}\n");
    env.write_repo("global/settings.local.json", "{}\n");

    let mut confirm = Scripted::new(&[Decision::AcceptAll]);
    let report = push_with(&env, &PushOptions::default(), &mut confirm);

    assert_eq!(confirm.asked, vec!["global/CLAUDE.md"]);
    assert_eq!(report.pushed, 3);
}

#[test]
fn test_push_asks_only_about_real_changes() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_local("CLAUDE.md", "same\n");
    env.write_repo("global/CLAUDE.md", "same\n");
    env.write_repo("global/settings.json", "{}\n");

    let mut confirm = Scripted::new(&[Decision::Accept]);
    let report = push_with(&env, &PushOptions::default(), &mut confirm);

    assert_eq!(confirm.asked, vec!["global/settings.json"]);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.missing, 3);
    assert_eq!(report.skipped(), 4);
}

#[test]
fn test_push_dry_run_changes_nothing_and_never_prompts() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    let local = env.write_local("CLAUDE.md", "local\n");
    env.write_repo("global/CLAUDE.md", "repo\n");
    env.write_repo("global/settings.json", "{}\n");
    let mtime_before = std::fs::metadata(&local).unwrap().modified().unwrap();

    let mut previews = Previews::default();
    let mut confirm = Scripted::new(&[]);
    let report = Reconciler::new(SyncContext::new(env.repo_root()))
        .push(
            &global_files(&env),
            &PushOptions {
                dry_run: true,
                yes: false,
            },
            &mut confirm,
            &mut previews,
        )
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.pushed, 2);
    assert!(confirm.asked.is_empty());
    assert_eq!(read(&local), "local\n");
    assert_eq!(std::fs::metadata(&local).unwrap().modified().unwrap(), mtime_before);
    assert!(!env.local_dir().join("settings.json").exists());
    assert!(env.backups_in(env.local_dir()).is_empty());

    // Diff goes from local to repo; a missing local file is a creation
    let diff = previews.0[0].1.diff.as_deref().unwrap();
    assert!(diff.contains("-local\n"));
    assert!(diff.contains("+repo\n"));
    assert_eq!(previews.0[1], ("global/settings.json".to_string(), ChangePreview::creates()));
}

#[test]
fn test_push_copy_failure_keeps_local_content() {
    let env = TestEnv::new();
    env.write_machine_config(&[]);
    env.write_repo("global/CLAUDE.md", "repo\n");
    // The repo side is a directory, so the copy fails after the backup
    std::fs::create_dir_all(env.repo_file("global/settings.json")).unwrap();
    let local = env.write_local("settings.json", "local\n");

    let report = push_with(&env, &yes(), &mut Scripted::new(&[]));

    assert_eq!(report.failed, 1);
    assert!(report.records[1].outcome.is_failure());
    assert_eq!(read(&local), "local\n");
    // The other file still went through
    assert_eq!(read(&env.local_dir().join("CLAUDE.md")), "repo\n");
}
