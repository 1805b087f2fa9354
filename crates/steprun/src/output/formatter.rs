use steprun_core::Step;
use steprun_runner::RunnerError;

pub(crate) trait OutputFormatter: Send + Sync {
    /// Text for stdout when `step` fails.
    fn format_failure(&self, step: &Step) -> String;

    /// `error:` line followed by one `caused by:` line per source.
    fn format_error(&self, error: &dyn std::error::Error) -> String;

    /// Diagnostic text for stderr when `step` fails.
    fn format_failure_detail(&self, error: &RunnerError) -> String;

    fn format_completion(&self, message: &str) -> String;
}
