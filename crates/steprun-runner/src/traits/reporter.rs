use steprun_core::Step;

use crate::RunnerError;

pub trait RunReporter: Send + Sync {
    fn step_failed(&self, step: &Step, error: &RunnerError);

    fn run_completed(&self, message: &str);
}
