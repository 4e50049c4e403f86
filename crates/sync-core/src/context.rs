//! Sync repository context and user preferences
//!
//! The repository root is resolved once per process and then passed around
//! explicitly as a [`SyncContext`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sync_fs::ConfigStore;

use crate::{Error, Result};

/// Environment variable naming the sync repository.
pub const REPO_ENV_VAR: &str = "CLAUDE_SYNC_REPO";

/// Machine/project registry file at the root of the sync repository.
pub const SYNC_CONFIG_FILE: &str = "sync.config.json";

/// Directory in the sync repository holding per-machine copies.
pub const CONFIGS_DIR: &str = "configs";

/// User preference file name, stored in the home directory.
pub const USER_CONFIG_FILE: &str = ".cc-config-sync.json";

/// Location of the sync repository for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncContext {
    repo_root: PathBuf,
}

impl SyncContext {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Pick the repository root: an explicit path (flag or environment) wins
    /// over the user preference file. The result is made absolute.
    pub fn resolve(explicit: Option<&Path>, preferences: &UserPreferences) -> Result<Self> {
        let root = explicit
            .map(Path::to_path_buf)
            .or_else(|| preferences.repo.clone())
            .ok_or(Error::RepoNotConfigured)?;

        let root = std::path::absolute(&root)?;
        tracing::debug!(repo = %root.display(), "Resolved sync repository");
        Ok(Self::new(root))
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// `<repo>/configs`
    pub fn configs_dir(&self) -> PathBuf {
        self.repo_root.join(CONFIGS_DIR)
    }

    /// `<repo>/sync.config.json`
    pub fn config_file(&self) -> PathBuf {
        self.repo_root.join(SYNC_CONFIG_FILE)
    }

    /// `<repo>/configs/<machine>`
    pub fn machine_dir(&self, machine: &str) -> PathBuf {
        self.configs_dir().join(machine)
    }

    /// `<repo>/configs/<machine>/projects/<project>`
    pub fn project_dir(&self, machine: &str, project: &str) -> PathBuf {
        self.machine_dir(machine).join("projects").join(project)
    }
}

/// Per-user settings kept outside any sync repository.
///
/// Keys this version does not know about are preserved on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Default sync repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<PathBuf>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserPreferences {
    /// `~/.cc-config-sync.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(USER_CONFIG_FILE))
            .ok_or(Error::NoHomeDir)
    }

    /// Load preferences. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        ConfigStore::new()
            .load_or_default(path)
            .map_err(|e| malformed_or_fs(path, e))
    }

    /// Load preferences, treating an unreadable or malformed file as empty.
    pub fn load_lenient(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable user preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        Ok(())
    }
}

/// Name of the current machine (its hostname).
pub fn current_machine_name() -> Result<String> {
    hostname::get()
        .map_err(Error::Hostname)?
        .into_string()
        .map_err(|raw| {
            Error::Hostname(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("hostname {raw:?} is not valid UTF-8"),
            ))
        })
}

/// Map a parse failure to [`Error::MalformedConfig`], keep everything else.
pub(crate) fn malformed_or_fs(path: &Path, error: sync_fs::Error) -> Error {
    match error {
        sync_fs::Error::ConfigParse { message, .. } => Error::MalformedConfig {
            path: path.to_path_buf(),
            message,
        },
        other => Error::Fs(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_layout_paths() {
        let ctx = SyncContext::new("/sync");
        assert_eq!(ctx.config_file(), PathBuf::from("/sync/sync.config.json"));
        assert_eq!(ctx.machine_dir("host"), PathBuf::from("/sync/configs/host"));
        assert_eq!(
            ctx.project_dir("host", "app"),
            PathBuf::from("/sync/configs/host/projects/app")
        );
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let prefs = UserPreferences {
            repo: Some(PathBuf::from("/from/prefs")),
            ..Default::default()
        };
        let ctx = SyncContext::resolve(Some(Path::new("/from/flag")), &prefs).unwrap();
        assert_eq!(ctx.repo_root(), Path::new("/from/flag"));
    }

    #[test]
    fn test_resolve_falls_back_to_preferences() {
        let prefs = UserPreferences {
            repo: Some(PathBuf::from("/from/prefs")),
            ..Default::default()
        };
        let ctx = SyncContext::resolve(None, &prefs).unwrap();
        assert_eq!(ctx.repo_root(), Path::new("/from/prefs"));
    }

    #[test]
    fn test_resolve_makes_relative_path_absolute() {
        let ctx = SyncContext::resolve(Some(Path::new("relative/repo")), &UserPreferences::default())
            .unwrap();
        assert!(ctx.repo_root().is_absolute());
        assert!(ctx.repo_root().ends_with("relative/repo"));
    }

    #[test]
    fn test_resolve_without_any_source_fails() {
        let err = SyncContext::resolve(None, &UserPreferences::default()).unwrap_err();
        assert!(matches!(err, Error::RepoNotConfigured));
    }

    #[test]
    fn test_preferences_preserve_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(USER_CONFIG_FILE);
        std::fs::write(&path, r#"{"theme": "dark", "repo": "/old"}"#).unwrap();

        let mut prefs = UserPreferences::load(&path).unwrap();
        prefs.repo = Some(PathBuf::from("/new"));
        prefs.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["repo"], "/new");
        assert_eq!(raw["theme"], "dark");
    }

    #[test]
    fn test_preferences_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let prefs = UserPreferences::load(&temp.path().join(USER_CONFIG_FILE)).unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_preferences_malformed_is_error_but_lenient_load_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(USER_CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            UserPreferences::load(&path),
            Err(Error::MalformedConfig { .. })
        ));
        assert_eq!(UserPreferences::load_lenient(&path), UserPreferences::default());
    }
}
