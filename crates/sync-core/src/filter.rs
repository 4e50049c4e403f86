//! Narrowing a machine's file set to one project or to global files

use crate::{Error, LogicalFile, Result};

/// Selection applied to the catalog before a pull, push or status run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Keep only files of this project
    pub project: Option<String>,
    /// Keep only global files
    pub global_only: bool,
}

impl FileFilter {
    pub fn new(project: Option<String>, global_only: bool) -> Self {
        Self {
            project,
            global_only,
        }
    }

    /// Fail fast on contradictory options, before anything is read.
    pub fn validate(&self) -> Result<()> {
        if self.project.is_some() && self.global_only {
            return Err(Error::ConflictingFilters);
        }
        Ok(())
    }

    /// Apply the filter, preserving catalog order.
    pub fn apply(&self, files: Vec<LogicalFile>) -> Result<Vec<LogicalFile>> {
        self.validate()?;

        if self.global_only {
            return Ok(files
                .into_iter()
                .filter(|f| f.label.starts_with("global/"))
                .collect());
        }

        if let Some(project) = &self.project {
            let prefix = format!("projects/{project}/");
            let matched: Vec<_> = files
                .into_iter()
                .filter(|f| f.label.starts_with(&prefix))
                .collect();

            if matched.is_empty() {
                return Err(Error::NoMatchingFiles {
                    project: project.clone(),
                });
            }
            return Ok(matched);
        }

        Ok(files)
    }
}
