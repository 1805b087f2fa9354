use std::io::Write as _;

use steprun_core::Step;
use steprun_runner::RunnerError;
use steprun_runner::traits::RunReporter;

use super::OutputFormatter;

/// Writes step failures and completion to the console.
pub(crate) struct ConsoleReporter<F> {
    formatter: F,
}

impl<F: OutputFormatter> ConsoleReporter<F> {
    pub(crate) fn new(formatter: F) -> Self {
        Self { formatter }
    }
}

impl<F: OutputFormatter> RunReporter for ConsoleReporter<F> {
    fn step_failed(&self, step: &Step, error: &RunnerError) {
        print!("{}", self.formatter.format_failure(step));
        let _ = std::io::stdout().flush();
        eprint!("{}", self.formatter.format_failure_detail(error));
    }

    fn run_completed(&self, message: &str) {
        print!("{}", self.formatter.format_completion(message));
        let _ = std::io::stdout().flush();
    }
}
