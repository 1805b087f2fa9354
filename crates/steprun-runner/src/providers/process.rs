use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use steprun_core::{EnvValue, ExitStatusCode, StepCommand};
use tracing::debug;

use crate::traits::ProcessLauncher;

pub struct SystemProcessLauncher;

impl SystemProcessLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for SystemProcessLauncher {
    fn launch(
        &self,
        command: &StepCommand,
        working_dir: &Path,
        env: &[(String, EnvValue)],
    ) -> std::io::Result<ExitStatusCode> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        for (key, value) in env {
            match value {
                EnvValue::Set(v) => process.env(key, v),
                EnvValue::Remove => process.env_remove(key),
            };
        }

        let status = process.status()?;
        debug!(command = %command, %status, "child process exited");

        Ok(exit_code_of(status))
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> ExitStatusCode {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => ExitStatusCode::new(code),
        (None, Some(signal)) => ExitStatusCode::new(128 + signal),
        (None, None) => ExitStatusCode::SENTINEL,
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> ExitStatusCode {
    status
        .code()
        .map_or(ExitStatusCode::SENTINEL, ExitStatusCode::new)
}
