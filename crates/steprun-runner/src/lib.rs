//! Fail-fast sequential step runner.
//!
//! Steps run one after another as child processes. The first step that
//! cannot enter its directory, cannot be started, or exits nonzero ends the
//! run, and its exit code becomes the run's exit code.

mod audit;
mod error;
pub mod providers;
mod runner;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use audit::{RunAuditLog, StepRecord, StepStatus};
pub use error::{Result, RunnerError};
pub use runner::{ACKNOWLEDGE_PROMPT, RunOutcome, StepRunner};
