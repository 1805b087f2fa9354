mod environment;
mod error;
mod interaction;
mod logging;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use steprun_core::{CurrentDirProvider, ExitStatusCode, FixedPathProvider, LaunchRootProvider};
use steprun_plan::{LaunchPlan, load_plan_config};
use steprun_runner::providers::SystemProcessLauncher;
use steprun_runner::traits::Acknowledger;
use steprun_runner::{RunOutcome, StepRunner};
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::interaction::{NoPauseAcknowledger, TerminalAcknowledger};
use crate::output::{ConsoleReporter, OutputFormatter as _, PlainTextFormatter};

#[derive(Parser)]
#[command(name = "steprun")]
#[command(version = env!("STEPRUN_VERSION"))]
#[command(
    about = "Activate the local virtual environment and run the entry-point script",
    long_about = None
)]
struct Cli {
    /// Directory holding the virtual environment and entry-point directory (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Plan config file, relative to the launch root (default: steprun.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let code = match launch(&cli) {
        Ok(outcome) => {
            debug!(summary = %outcome.audit_log.summary(), "run finished");
            outcome.exit_code
        }
        Err(e) => {
            print_error(&e);
            ExitStatusCode::SENTINEL
        }
    };

    std::process::exit(code.code());
}

fn launch(cli: &Cli) -> Result<RunOutcome> {
    let launch_root = resolve_launch_root(cli.path.as_deref())?;
    let config = load_plan_config(&launch_root, cli.config.as_deref())?;
    let plan = LaunchPlan::from_config(&launch_root, &config);

    let acknowledger: Box<dyn Acknowledger> = match environment::no_pause_reason(cli.no_pause) {
        Some(reason) => {
            info!(?reason, "acknowledgment pause disabled");
            Box::new(NoPauseAcknowledger)
        }
        None => Box::new(TerminalAcknowledger),
    };

    let runner = StepRunner::new(
        SystemProcessLauncher::new(),
        acknowledger,
        ConsoleReporter::new(PlainTextFormatter),
    );

    Ok(runner.run(&plan.launch_root, &plan.steps, &plan.completion_message))
}

fn resolve_launch_root(path: Option<&Path>) -> Result<PathBuf> {
    let root = match path {
        Some(p) => FixedPathProvider::new(p).launch_root(),
        None => CurrentDirProvider.launch_root(),
    }
    .map_err(CliError::CurrentDir)?;

    if !root.is_dir() {
        return Err(CliError::InvalidLaunchRoot(root));
    }

    Ok(root)
}

fn print_error(error: &CliError) {
    eprint!("{}", PlainTextFormatter.format_error(error));
}
