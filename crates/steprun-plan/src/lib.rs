//! Builds the launch plan: which virtual environment to activate and which
//! entry-point script to run, optionally tuned by a `steprun.toml` file.

mod config;
mod error;
mod plan;
mod venv;

pub use config::{CONFIG_FILE_NAME, PlanConfig, load_plan_config};
pub use error::PlanError;
pub use plan::{ACTIVATE_STEP, ENTRY_POINT_STEP, LaunchPlan};
pub use venv::VirtualEnv;
