use std::path::{Path, PathBuf};

use steprun_core::{Step, StepCommand};
use tracing::debug;

use crate::config::PlanConfig;
use crate::venv::VirtualEnv;

pub const ACTIVATE_STEP: &str = "activate";
pub const ENTRY_POINT_STEP: &str = "run-entry-point";

/// The ordered steps of one launch, plus where they start.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub launch_root: PathBuf,
    pub steps: Vec<Step>,
    pub completion_message: String,
}

impl LaunchPlan {
    /// Builds the two-step plan: activate the virtual environment, then run
    /// the entry-point script from its directory inside that environment.
    #[must_use]
    pub fn from_config(launch_root: &Path, config: &PlanConfig) -> Self {
        let venv = VirtualEnv::locate(launch_root, config.venv_dir());
        let interpreter = venv.executable(config.interpreter());
        let overlay = venv.activation_overlay();

        debug!(
            venv = %venv.root().display(),
            interpreter = %interpreter.display(),
            "building launch plan"
        );

        let activate = Step::new(
            ACTIVATE_STEP,
            StepCommand::new(&interpreter).arg("--version"),
            config.activate_failure_message(),
        )
        .with_env_overlay(&overlay);

        let entry_point = Step::new(
            ENTRY_POINT_STEP,
            StepCommand::new(&interpreter).arg(config.entry_script()),
            config.entry_failure_message(),
        )
        .in_directory(config.entry_dir())
        .with_env_overlay(&overlay);

        Self {
            launch_root: launch_root.to_path_buf(),
            steps: vec![activate, entry_point],
            completion_message: config.completion_message().to_string(),
        }
    }
}
