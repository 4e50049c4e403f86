//! [`TestEnv`] builder for reconciliation scenarios.
//!
//! Each environment owns three temporary directories:
//!
//! - `local`: stands in for the machine's global config dir (`~/.claude`)
//! - `project`: a tracked project root
//! - `repo`: the sync repository holding `sync.config.json` and `configs/`

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Machine name used by every fixture.
pub const TEST_MACHINE: &str = "test-machine";

/// A local side, a project and a sync repository in temporary directories.
///
/// # Example
///
/// ```rust,no_run
/// use sync_test_utils::TestEnv;
///
/// let env = TestEnv::new();
/// env.write_machine_config(&[]);
/// env.write_local("CLAUDE.md", "# My global config\n");
/// assert!(!env.repo_file("global/CLAUDE.md").exists());
/// ```
pub struct TestEnv {
    repo: TempDir,
    local: TempDir,
    project: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Create three empty temporary directories.
    pub fn new() -> Self {
        Self {
            repo: TempDir::new().unwrap(),
            local: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        }
    }

    /// Root of the sync repository.
    pub fn repo_root(&self) -> &Path {
        self.repo.path()
    }

    /// The machine's global config directory.
    pub fn local_dir(&self) -> &Path {
        self.local.path()
    }

    /// Root of the tracked project.
    pub fn project_dir(&self) -> &Path {
        self.project.path()
    }

    /// Write `sync.config.json` registering [`TEST_MACHINE`] with the local
    /// dir as its global config path and the given projects.
    pub fn write_machine_config(&self, projects: &[(&str, &Path)]) {
        let projects: serde_json::Map<String, serde_json::Value> = projects
            .iter()
            .map(|(name, path)| {
                (
                    name.to_string(),
                    serde_json::Value::String(path.to_string_lossy().into_owned()),
                )
            })
            .collect();

        let config = serde_json::json!({
            "machines": {
                TEST_MACHINE: {
                    "globalConfigPath": self.local_dir().to_string_lossy(),
                    "projects": projects,
                }
            }
        });

        let content = serde_json::to_string_pretty(&config).unwrap() + "\n";
        fs::write(self.repo_root().join("sync.config.json"), content).unwrap();
    }

    /// Path of a file under `configs/<machine>/` in the repo.
    pub fn repo_file(&self, relative: &str) -> PathBuf {
        self.repo_root()
            .join("configs")
            .join(TEST_MACHINE)
            .join(relative)
    }

    /// Write a file under the local dir, creating parents.
    pub fn write_local(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.local_dir().join(relative), content)
    }

    /// Write a file under the project dir, creating parents.
    pub fn write_project(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.project_dir().join(relative), content)
    }

    /// Write a file under `configs/<machine>/` in the repo, creating parents.
    pub fn write_repo(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.repo_file(relative), content)
    }

    /// All backup files (`*.backup-*`) directly inside `dir`, sorted.
    pub fn backups_in(&self, dir: &Path) -> Vec<PathBuf> {
        let mut backups: Vec<PathBuf> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| {
                        p.file_name()
                            .map(|n| n.to_string_lossy().contains(".backup-"))
                            .unwrap_or(false)
                    })
                    .collect()
            })
            .unwrap_or_default();
        backups.sort();
        backups
    }
}

/// Read a file to a string, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}
