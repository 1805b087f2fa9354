use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use steprun_core::{EnvValue, ExitStatusCode, Step, StepCommand};

use crate::RunnerError;
use crate::traits::{Acknowledger, ProcessLauncher, RunReporter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub command: StepCommand,
    pub working_dir: PathBuf,
    pub env: Vec<(String, EnvValue)>,
}

/// Returns scripted exit codes keyed by program name; unknown programs exit 0.
#[derive(Default)]
pub struct MockProcessLauncher {
    exit_codes: HashMap<PathBuf, i32>,
    unspawnable: Vec<PathBuf>,
    launches: Mutex<Vec<LaunchRecord>>,
}

impl MockProcessLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(PathBuf::from(program), code);
        self
    }

    #[must_use]
    pub fn with_unspawnable(mut self, program: &str) -> Self {
        self.unspawnable.push(PathBuf::from(program));
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn launches(&self) -> Vec<LaunchRecord> {
        self.launches.lock().expect("mutex poisoned").clone()
    }

    #[must_use]
    pub fn launched_programs(&self) -> Vec<String> {
        self.launches()
            .into_iter()
            .map(|r| r.command.program.display().to_string())
            .collect()
    }
}

impl ProcessLauncher for Arc<MockProcessLauncher> {
    fn launch(
        &self,
        command: &StepCommand,
        working_dir: &Path,
        env: &[(String, EnvValue)],
    ) -> std::io::Result<ExitStatusCode> {
        if self.unspawnable.contains(&command.program) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "program not found",
            ));
        }

        self.launches
            .lock()
            .expect("mutex poisoned")
            .push(LaunchRecord {
                command: command.clone(),
                working_dir: working_dir.to_path_buf(),
                env: env.to_vec(),
            });

        let code = self.exit_codes.get(&command.program).copied().unwrap_or(0);
        Ok(ExitStatusCode::new(code))
    }
}

#[derive(Default)]
pub struct MockAcknowledger {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockAcknowledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mutex poisoned").clone()
    }
}

impl Acknowledger for Arc<MockAcknowledger> {
    fn acknowledge(&self, prompt: &str) -> std::io::Result<()> {
        self.prompts
            .lock()
            .expect("mutex poisoned")
            .push(prompt.to_string());
        if self.fail {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Failed { step: String, message: String },
    Completed(String),
}

#[derive(Default)]
pub struct MockReporter {
    events: Mutex<Vec<ReportedEvent>>,
}

impl MockReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

impl RunReporter for Arc<MockReporter> {
    fn step_failed(&self, step: &Step, _error: &RunnerError) {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(ReportedEvent::Failed {
                step: step.name.clone(),
                message: step.failure_message.clone(),
            });
    }

    fn run_completed(&self, message: &str) {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(ReportedEvent::Completed(message.to_string()));
    }
}
