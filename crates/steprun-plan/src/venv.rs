use std::ffi::OsString;
use std::path::{Path, PathBuf};

use steprun_core::EnvValue;

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

/// A Python virtual environment rooted at a directory.
///
/// Activation does not source any script. It is expressed as an environment
/// overlay applied to each child process that should see the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locates `venv_dir` under `launch_root`.
    #[must_use]
    pub fn locate(launch_root: &Path, venv_dir: &Path) -> Self {
        Self::new(launch_root.join(venv_dir))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    /// Path of `name` inside the environment's bin dir, with the platform's
    /// executable suffix.
    #[must_use]
    pub fn executable(&self, name: &str) -> PathBuf {
        self.bin_dir()
            .join(format!("{name}{}", std::env::consts::EXE_SUFFIX))
    }

    /// Overlay for the current process `PATH`.
    #[must_use]
    pub fn activation_overlay(&self) -> Vec<(String, EnvValue)> {
        self.activation_overlay_with_path(std::env::var_os("PATH"))
    }

    /// Sets `VIRTUAL_ENV`, prepends the bin dir to `current_path`, and drops
    /// `PYTHONHOME`.
    #[must_use]
    pub fn activation_overlay_with_path(
        &self,
        current_path: Option<OsString>,
    ) -> Vec<(String, EnvValue)> {
        let mut entries = vec![self.bin_dir()];
        if let Some(current) = current_path.as_deref() {
            entries.extend(std::env::split_paths(current));
        }

        let path = std::env::join_paths(&entries).map_or_else(
            |_| self.bin_dir().to_string_lossy().into_owned(),
            |joined| joined.to_string_lossy().into_owned(),
        );

        vec![
            (
                String::from("VIRTUAL_ENV"),
                EnvValue::Set(self.root.to_string_lossy().into_owned()),
            ),
            (String::from("PATH"), EnvValue::Set(path)),
            (String::from("PYTHONHOME"), EnvValue::Remove),
        ]
    }
}
