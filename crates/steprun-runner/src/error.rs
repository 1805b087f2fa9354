use steprun_core::{CoreError, ExitStatusCode};
use thiserror::Error;

/// Why a run stopped early. Every variant is fatal to the run.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("step '{step}' could not enter its working directory")]
    DirectoryNotFound {
        step: String,
        #[source]
        source: CoreError,
    },

    #[error("step '{step}' exited with code {code}")]
    StepFailed { step: String, code: ExitStatusCode },

    #[error("step '{step}' could not start '{command}'")]
    SpawnFailed {
        step: String,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for acknowledgment")]
    Acknowledge(#[source] std::io::Error),
}

impl RunnerError {
    /// Exit code the whole run should report for this error.
    #[must_use]
    pub fn exit_code(&self) -> ExitStatusCode {
        match self {
            Self::DirectoryNotFound { source, .. } => source.exit_code(),
            Self::StepFailed { code, .. } => *code,
            Self::SpawnFailed { .. } => ExitStatusCode::SPAWN_FAILED,
            Self::Acknowledge(_) => ExitStatusCode::SENTINEL,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
