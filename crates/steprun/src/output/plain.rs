use std::fmt::Write as _;

use steprun_core::Step;
use steprun_runner::RunnerError;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_failure(&self, step: &Step) -> String {
        format!("{}\n", step.failure_message)
    }

    fn format_error(&self, error: &dyn std::error::Error) -> String {
        let mut output = format!("error: {error}\n");

        let mut source = error.source();
        while let Some(cause) = source {
            let _ = writeln!(output, "caused by: {cause}");
            source = cause.source();
        }

        output
    }

    fn format_failure_detail(&self, error: &RunnerError) -> String {
        self.format_error(error)
    }

    fn format_completion(&self, message: &str) -> String {
        format!("{message}\n")
    }
}
