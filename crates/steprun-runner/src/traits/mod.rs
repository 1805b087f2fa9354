mod acknowledger;
mod process_launcher;
mod reporter;

pub use acknowledger::Acknowledger;
pub use process_launcher::ProcessLauncher;
pub use reporter::RunReporter;
