use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("launch root '{0}' is not a directory")]
    InvalidLaunchRoot(std::path::PathBuf),

    #[error("failed to load launch plan")]
    Plan(#[from] steprun_plan::PlanError),
}

pub type Result<T> = std::result::Result<T, CliError>;
