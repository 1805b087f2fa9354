mod process;

pub use process::SystemProcessLauncher;
