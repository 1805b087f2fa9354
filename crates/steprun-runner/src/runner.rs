use std::path::{Path, PathBuf};

use steprun_core::{ExitStatusCode, Step, resolve_directory_change};
use tracing::{debug, info, warn};

use crate::audit::RunAuditLog;
use crate::error::{Result, RunnerError};
use crate::traits::{Acknowledger, ProcessLauncher, RunReporter};

pub const ACKNOWLEDGE_PROMPT: &str = "Press Enter to continue...";

/// Result of one run. `exit_code` is what the process should exit with.
#[derive(Debug)]
pub struct RunOutcome {
    pub exit_code: ExitStatusCode,
    pub failure: Option<RunnerError>,
    pub audit_log: RunAuditLog,
}

impl RunOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Runs steps strictly in order and stops at the first failure.
///
/// The current directory is threaded from step to step: a successful
/// directory change applies to the step that made it and to every later step.
/// Nothing is retried or rolled back.
pub struct StepRunner<L, A, R> {
    launcher: L,
    acknowledger: A,
    reporter: R,
}

impl<L, A, R> StepRunner<L, A, R>
where
    L: ProcessLauncher,
    A: Acknowledger,
    R: RunReporter,
{
    pub fn new(launcher: L, acknowledger: A, reporter: R) -> Self {
        Self {
            launcher,
            acknowledger,
            reporter,
        }
    }

    /// Runs `steps` starting in `launch_root`.
    ///
    /// Success or failure, the user is asked to acknowledge exactly once
    /// before this returns.
    pub fn run(&self, launch_root: &Path, steps: &[Step], completion_message: &str) -> RunOutcome {
        let mut audit_log = RunAuditLog::new();
        let mut current_dir = launch_root.to_path_buf();

        for (index, step) in steps.iter().enumerate() {
            audit_log.record_start(&step.name);
            info!(step = %step.name, command = %step.command, "running step");

            match self.execute_step(step, &current_dir) {
                Ok(next_dir) => {
                    audit_log.record_success();
                    current_dir = next_dir;
                }
                Err(error) => {
                    let exit_code = error.exit_code();
                    audit_log.record_failure(exit_code);
                    for skipped in &steps[index + 1..] {
                        audit_log.record_skipped(&skipped.name);
                    }

                    info!(step = %step.name, %exit_code, "step failed, stopping run");
                    self.reporter.step_failed(step, &error);
                    self.pause();

                    return RunOutcome {
                        exit_code,
                        failure: Some(error),
                        audit_log,
                    };
                }
            }
        }

        info!(steps = steps.len(), "all steps succeeded");
        self.reporter.run_completed(completion_message);
        self.pause();

        RunOutcome {
            exit_code: ExitStatusCode::SUCCESS,
            failure: None,
            audit_log,
        }
    }

    /// Returns the directory later steps should start from.
    fn execute_step(&self, step: &Step, current_dir: &Path) -> Result<PathBuf> {
        let working_dir = match step.directory_change() {
            Some(change) => resolve_directory_change(current_dir, change).map_err(|source| {
                RunnerError::DirectoryNotFound {
                    step: step.name.clone(),
                    source,
                }
            })?,
            None => current_dir.to_path_buf(),
        };

        debug!(step = %step.name, dir = %working_dir.display(), "spawning");

        let code = self
            .launcher
            .launch(&step.command, &working_dir, &step.env)
            .map_err(|source| RunnerError::SpawnFailed {
                step: step.name.clone(),
                command: step.command.to_string(),
                source,
            })?;

        if !code.is_success() {
            return Err(RunnerError::StepFailed {
                step: step.name.clone(),
                code,
            });
        }

        Ok(working_dir)
    }

    fn pause(&self) {
        if let Err(error) = self.acknowledger.acknowledge(ACKNOWLEDGE_PROMPT) {
            let error = RunnerError::Acknowledge(error);
            warn!(%error, "continuing without acknowledgment");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use steprun_core::StepCommand;
    use tempfile::TempDir;

    use super::*;
    use crate::audit::StepStatus;
    use crate::mocks::{MockAcknowledger, MockProcessLauncher, MockReporter, ReportedEvent};

    struct Harness {
        launcher: Arc<MockProcessLauncher>,
        acknowledger: Arc<MockAcknowledger>,
        reporter: Arc<MockReporter>,
    }

    impl Harness {
        fn new(launcher: MockProcessLauncher) -> Self {
            Self::with_acknowledger(launcher, MockAcknowledger::new())
        }

        fn with_acknowledger(launcher: MockProcessLauncher, acknowledger: MockAcknowledger) -> Self {
            Self {
                launcher: Arc::new(launcher),
                acknowledger: Arc::new(acknowledger),
                reporter: Arc::new(MockReporter::new()),
            }
        }

        fn run(&self, root: &Path, steps: &[Step]) -> RunOutcome {
            let runner = StepRunner::new(
                Arc::clone(&self.launcher),
                Arc::clone(&self.acknowledger),
                Arc::clone(&self.reporter),
            );
            runner.run(root, steps, "done")
        }
    }

    fn step(program: &str) -> Step {
        Step::new(program, StepCommand::new(program), format!("{program} failed"))
    }

    #[test]
    fn all_succeeding_steps_run_once_in_order() {
        let harness = Harness::new(MockProcessLauncher::new());

        let outcome = harness.run(Path::new("/launch"), &[step("a"), step("b")]);

        assert!(outcome.is_success());
        assert_eq!(outcome.exit_code, ExitStatusCode::SUCCESS);
        assert_eq!(harness.launcher.launched_programs(), ["a", "b"]);
        assert_eq!(
            harness.reporter.events(),
            [ReportedEvent::Completed("done".to_string())]
        );
    }

    #[test]
    fn failing_step_stops_the_run_with_its_code() {
        let harness = Harness::new(MockProcessLauncher::new().with_exit_code("a", 1));

        let outcome = harness.run(Path::new("/launch"), &[step("a"), step("b")]);

        assert_eq!(outcome.exit_code, ExitStatusCode::new(1));
        assert_eq!(harness.launcher.launched_programs(), ["a"]);
        assert!(matches!(
            outcome.failure,
            Some(RunnerError::StepFailed { ref step, .. }) if step == "a"
        ));
    }

    #[test]
    fn middle_failure_skips_the_rest() {
        let harness = Harness::new(MockProcessLauncher::new().with_exit_code("b", 7));

        let outcome = harness.run(Path::new("/launch"), &[step("a"), step("b"), step("c")]);

        assert_eq!(outcome.exit_code, ExitStatusCode::new(7));
        assert_eq!(harness.launcher.launched_programs(), ["a", "b"]);
        let statuses: Vec<StepStatus> =
            outcome.audit_log.records().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [StepStatus::Executed, StepStatus::Failed, StepStatus::Skipped]
        );
    }

    #[test]
    fn failure_message_is_reported() {
        let harness = Harness::new(MockProcessLauncher::new().with_exit_code("a", 1));

        harness.run(Path::new("/launch"), &[step("a")]);

        assert_eq!(
            harness.reporter.events(),
            [ReportedEvent::Failed {
                step: "a".to_string(),
                message: "a failed".to_string(),
            }]
        );
    }

    #[test]
    fn missing_directory_never_runs_the_command() -> anyhow::Result<()> {
        let root = TempDir::new()?;
        let harness = Harness::new(MockProcessLauncher::new());

        let outcome = harness.run(root.path(), &[step("a").in_directory("missing"), step("b")]);

        assert!(!outcome.exit_code.is_success());
        assert!(harness.launcher.launches().is_empty());
        assert!(matches!(
            outcome.failure,
            Some(RunnerError::DirectoryNotFound { .. })
        ));
        assert_eq!(
            harness.reporter.events(),
            [ReportedEvent::Failed {
                step: "a".to_string(),
                message: "a failed".to_string(),
            }]
        );
        Ok(())
    }

    #[test]
    fn directory_change_is_passed_to_the_launcher() -> anyhow::Result<()> {
        let root = TempDir::new()?;
        std::fs::create_dir(root.path().join("src"))?;
        let harness = Harness::new(MockProcessLauncher::new());

        harness.run(root.path(), &[step("a"), step("b").in_directory("src")]);

        let launches = harness.launcher.launches();
        assert_eq!(launches[0].working_dir, root.path());
        assert_eq!(launches[1].working_dir, root.path().join("src"));
        Ok(())
    }

    #[test]
    fn directory_change_persists_to_later_steps() -> anyhow::Result<()> {
        let root = TempDir::new()?;
        std::fs::create_dir_all(root.path().join("src/jobs"))?;
        let harness = Harness::new(MockProcessLauncher::new());

        harness.run(
            root.path(),
            &[
                step("a").in_directory("src"),
                step("b"),
                step("c").in_directory("jobs"),
            ],
        );

        let dirs: Vec<PathBuf> = harness
            .launcher
            .launches()
            .into_iter()
            .map(|l| l.working_dir)
            .collect();
        assert_eq!(
            dirs,
            [
                root.path().join("src"),
                root.path().join("src"),
                root.path().join("src/jobs"),
            ]
        );
        Ok(())
    }

    #[test]
    fn spawn_failure_reports_command_not_found_code() {
        let harness = Harness::new(MockProcessLauncher::new().with_unspawnable("a"));

        let outcome = harness.run(Path::new("/launch"), &[step("a"), step("b")]);

        assert_eq!(outcome.exit_code, ExitStatusCode::SPAWN_FAILED);
        assert!(harness.launcher.launches().is_empty());
    }

    #[test]
    fn env_overlay_reaches_the_launcher() {
        let harness = Harness::new(MockProcessLauncher::new());

        harness.run(
            Path::new("/launch"),
            &[step("a").with_env("VIRTUAL_ENV", "/launch/venv")],
        );

        let launches = harness.launcher.launches();
        assert_eq!(launches[0].env.len(), 1);
        assert_eq!(launches[0].env[0].0, "VIRTUAL_ENV");
    }

    #[test]
    fn acknowledgment_requested_once_on_success() {
        let harness = Harness::new(MockProcessLauncher::new());

        harness.run(Path::new("/launch"), &[step("a"), step("b")]);

        assert_eq!(harness.acknowledger.prompts(), [ACKNOWLEDGE_PROMPT]);
    }

    #[test]
    fn acknowledgment_requested_once_on_failure() {
        let harness = Harness::new(MockProcessLauncher::new().with_exit_code("a", 2));

        harness.run(Path::new("/launch"), &[step("a"), step("b")]);

        assert_eq!(harness.acknowledger.prompts().len(), 1);
    }

    #[test]
    fn acknowledgment_error_keeps_exit_code() {
        let harness = Harness::with_acknowledger(
            MockProcessLauncher::new().with_exit_code("a", 5),
            MockAcknowledger::failing(),
        );

        let outcome = harness.run(Path::new("/launch"), &[step("a")]);

        assert_eq!(outcome.exit_code, ExitStatusCode::new(5));
    }

    #[test]
    fn empty_plan_completes_successfully() {
        let harness = Harness::new(MockProcessLauncher::new());

        let outcome = harness.run(Path::new("/launch"), &[]);

        assert!(outcome.is_success());
        assert!(outcome.audit_log.records().is_empty());
        assert_eq!(harness.acknowledger.prompts().len(), 1);
    }
}
