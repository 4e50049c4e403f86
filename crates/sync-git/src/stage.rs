//! Staging files into the index

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// Add `paths` to the index of the repository containing `repo_root`.
///
/// Paths may be absolute or relative to `repo_root`. Every path must resolve
/// to a file inside the repository's working directory.
pub fn stage<P: AsRef<Path>>(paths: &[P], repo_root: &Path) -> Result<()> {
    if paths.is_empty() {
        return Ok(());
    }

    let repo = Repository::discover(repo_root)?;
    let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
        path: repo_root.to_path_buf(),
    })?;
    let workdir = canonical(workdir)?;

    let mut index = repo.index()?;
    for path in paths {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            repo_root.join(path)
        };
        let relative = relative_to(&workdir, &canonical(&absolute)?)?;

        tracing::debug!(path = %relative.display(), "Staging file");
        index.add_path(&relative)?;
    }
    index.write()?;

    Ok(())
}

fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|source| Error::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

fn relative_to(root: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| Error::OutsideRepository {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
}
