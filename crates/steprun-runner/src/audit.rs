use std::time::Instant;

use steprun_core::ExitStatusCode;

/// Status of a step in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepStatus {
    /// Step is running or finished successfully.
    Executed,
    /// Step failed; the run stopped here.
    Failed,
    /// Step never ran because an earlier step failed.
    Skipped,
}

/// Record of a step in one run.
#[derive(Debug)]
pub struct StepRecord {
    /// Name of the step.
    pub name: String,
    /// Current status.
    pub status: StepStatus,
    /// Exit code, once the step has finished.
    pub exit_code: Option<ExitStatusCode>,
    /// When the step started, if it ran.
    pub started_at: Option<Instant>,
    /// When the step finished.
    pub completed_at: Option<Instant>,
}

/// Audit log tracking every step of a run, including the ones never reached.
#[derive(Debug, Default)]
pub struct RunAuditLog {
    records: Vec<StepRecord>,
}

impl RunAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_start(&mut self, name: &str) {
        self.records.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Executed,
            exit_code: None,
            started_at: Some(Instant::now()),
            completed_at: None,
        });
    }

    pub(crate) fn record_success(&mut self) {
        if let Some(record) = self.records.last_mut() {
            record.status = StepStatus::Executed;
            record.exit_code = Some(ExitStatusCode::SUCCESS);
            record.completed_at = Some(Instant::now());
        }
    }

    pub(crate) fn record_failure(&mut self, code: ExitStatusCode) {
        if let Some(record) = self.records.last_mut() {
            record.status = StepStatus::Failed;
            record.exit_code = Some(code);
            record.completed_at = Some(Instant::now());
        }
    }

    pub(crate) fn record_skipped(&mut self, name: &str) {
        self.records.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Skipped,
            exit_code: None,
            started_at: None,
            completed_at: None,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Names of the steps that actually started, in order.
    #[must_use]
    pub fn executed_steps(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.status != StepStatus::Skipped)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// One line per step, for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for record in &self.records {
            let line = match (record.status, record.exit_code) {
                (StepStatus::Executed, _) => format!("✓ {}", record.name),
                (StepStatus::Failed, Some(code)) => format!("✗ {} (exit {code})", record.name),
                (StepStatus::Failed, None) => format!("✗ {}", record.name),
                (StepStatus::Skipped, _) => format!("- {} (skipped)", record.name),
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}
