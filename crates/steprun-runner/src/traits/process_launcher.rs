use std::path::Path;

use steprun_core::{EnvValue, ExitStatusCode, StepCommand};

pub trait ProcessLauncher: Send + Sync {
    /// Runs `command` to completion in `working_dir` with `env` applied on
    /// top of the inherited environment. Standard streams are inherited.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or waited on.
    fn launch(
        &self,
        command: &StepCommand,
        working_dir: &Path,
        env: &[(String, EnvValue)],
    ) -> std::io::Result<ExitStatusCode>;
}
