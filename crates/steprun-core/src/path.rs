use std::path::{Path, PathBuf};

use crate::error::CoreError;

pub trait LaunchRootProvider: Send + Sync {
    fn launch_root(&self) -> std::io::Result<PathBuf>;
}

#[derive(Default, Clone)]
pub struct CurrentDirProvider;

impl LaunchRootProvider for CurrentDirProvider {
    fn launch_root(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

pub struct FixedPathProvider(PathBuf);

impl FixedPathProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl LaunchRootProvider for FixedPathProvider {
    /// Relative paths are anchored at the current directory, so child
    /// processes spawned elsewhere still resolve them.
    fn launch_root(&self) -> std::io::Result<PathBuf> {
        std::path::absolute(&self.0)
    }
}

/// Resolves a step's directory change against the run's current directory.
///
/// Absolute targets replace `current`. The target must exist and be a
/// directory; the process working directory is left untouched.
///
/// # Errors
///
/// Returns [`CoreError::DirectoryNotFound`] if the target cannot be read and
/// [`CoreError::NotADirectory`] if it exists but is not a directory.
pub fn resolve_directory_change(current: &Path, change: &Path) -> Result<PathBuf, CoreError> {
    let target = current.join(change);

    let metadata = std::fs::metadata(&target).map_err(|source| CoreError::DirectoryNotFound {
        path: target.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory { path: target });
    }

    Ok(target)
}
