use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::PlanError;

pub const CONFIG_FILE_NAME: &str = "steprun.toml";

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawPlanConfig {
    venv_dir: Option<PathBuf>,
    entry_dir: Option<PathBuf>,
    entry_script: Option<String>,
    interpreter: Option<String>,
    activate_failure_message: Option<String>,
    entry_failure_message: Option<String>,
    completion_message: Option<String>,
}

/// Settings for the default launch plan. Every field has a default matching
/// the layout `venv/` + `src/main.py` under the launch root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    venv_dir: PathBuf,
    entry_dir: PathBuf,
    entry_script: String,
    interpreter: String,
    activate_failure_message: String,
    entry_failure_message: String,
    completion_message: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            venv_dir: PathBuf::from("venv"),
            entry_dir: PathBuf::from("src"),
            entry_script: String::from("main.py"),
            interpreter: String::from("python"),
            activate_failure_message: String::from("Failed to activate virtual environment."),
            entry_failure_message: String::from("Failed to run main.py."),
            completion_message: String::from("Process completed successfully."),
        }
    }
}

impl PlanConfig {
    #[must_use]
    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    #[must_use]
    pub fn entry_dir(&self) -> &Path {
        &self.entry_dir
    }

    #[must_use]
    pub fn entry_script(&self) -> &str {
        &self.entry_script
    }

    #[must_use]
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    #[must_use]
    pub fn activate_failure_message(&self) -> &str {
        &self.activate_failure_message
    }

    #[must_use]
    pub fn entry_failure_message(&self) -> &str {
        &self.entry_failure_message
    }

    #[must_use]
    pub fn completion_message(&self) -> &str {
        &self.completion_message
    }

    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, contains unknown
    /// keys, or sets a required value to an empty string.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, PlanError> {
        let raw: RawPlanConfig =
            toml::from_str(content).map_err(|source| PlanError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        let defaults = Self::default();

        let entry_script = non_empty(raw.entry_script, path, "entry-script")?;
        let interpreter = non_empty(raw.interpreter, path, "interpreter")?;

        // The default entry message names the default script.
        let entry_failure_message = match (&raw.entry_failure_message, &entry_script) {
            (Some(message), _) => message.clone(),
            (None, Some(script)) => format!("Failed to run {script}."),
            (None, None) => defaults.entry_failure_message,
        };

        Ok(Self {
            venv_dir: raw.venv_dir.unwrap_or(defaults.venv_dir),
            entry_dir: raw.entry_dir.unwrap_or(defaults.entry_dir),
            entry_script: entry_script.unwrap_or(defaults.entry_script),
            interpreter: interpreter.unwrap_or(defaults.interpreter),
            activate_failure_message: raw
                .activate_failure_message
                .unwrap_or(defaults.activate_failure_message),
            entry_failure_message,
            completion_message: raw
                .completion_message
                .unwrap_or(defaults.completion_message),
        })
    }
}

fn non_empty(
    value: Option<String>,
    path: &Path,
    field: &'static str,
) -> Result<Option<String>, PlanError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(PlanError::EmptyField {
            path: path.to_path_buf(),
            field,
        }),
        other => Ok(other),
    }
}

/// Loads the plan config.
///
/// An explicit path must exist. Without one, `steprun.toml` under
/// `launch_root` is used when present, and the defaults otherwise.
///
/// # Errors
///
/// Returns an error if an explicit config is missing, or if the config file
/// cannot be read or parsed.
pub fn load_plan_config(
    launch_root: &Path,
    explicit: Option<&Path>,
) -> Result<PlanConfig, PlanError> {
    let path = match explicit {
        Some(path) => {
            let path = launch_root.join(path);
            if !path.is_file() {
                return Err(PlanError::ConfigNotFound { path });
            }
            path
        }
        None => {
            let path = launch_root.join(CONFIG_FILE_NAME);
            if !path.is_file() {
                debug!(root = %launch_root.display(), "no config file, using defaults");
                return Ok(PlanConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| PlanError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    debug!(config = %path.display(), "loading plan config");
    PlanConfig::from_toml_str(&content, &path)
}
