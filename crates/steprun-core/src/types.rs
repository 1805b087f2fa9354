use std::fmt;
use std::path::{Path, PathBuf};

/// Exit code propagated from a step to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatusCode(i32);

impl ExitStatusCode {
    pub const SUCCESS: Self = Self(0);

    /// Used when the OS reports no code for a failure.
    pub const SENTINEL: Self = Self(1);

    /// The command could not be started at all.
    pub const SPAWN_FAILED: Self = Self(127);

    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Code reported by a failed OS call, or [`Self::SENTINEL`].
    #[must_use]
    pub fn from_io_error(error: &std::io::Error) -> Self {
        error
            .raw_os_error()
            .filter(|code| *code != 0)
            .map_or(Self::SENTINEL, Self)
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ExitStatusCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl StepCommand {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Value of an environment overlay entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    Set(String),
    Remove,
}

/// One unit of sequential work: an optional directory change plus a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub command: StepCommand,
    pub working_directory_change: Option<PathBuf>,
    pub failure_message: String,
    pub env: Vec<(String, EnvValue)>,
}

impl Step {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        command: StepCommand,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            working_directory_change: None,
            failure_message: failure_message.into(),
            env: Vec::new(),
        }
    }

    #[must_use]
    pub fn in_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory_change = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), EnvValue::Set(value.into())));
        self
    }

    #[must_use]
    pub fn without_env(mut self, key: impl Into<String>) -> Self {
        self.env.push((key.into(), EnvValue::Remove));
        self
    }

    #[must_use]
    pub fn with_env_overlay(mut self, overlay: &[(String, EnvValue)]) -> Self {
        self.env.extend_from_slice(overlay);
        self
    }

    #[must_use]
    pub fn directory_change(&self) -> Option<&Path> {
        self.working_directory_change.as_deref()
    }
}
