use std::io::{BufRead as _, IsTerminal, Write as _};

use dialoguer::Input;
use steprun_runner::traits::Acknowledger;

/// Waits for Enter. Uses a dialoguer prompt on a terminal and a plain line
/// read otherwise.
pub struct TerminalAcknowledger;

impl Acknowledger for TerminalAcknowledger {
    fn acknowledge(&self, prompt: &str) -> std::io::Result<()> {
        if std::io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .report(false)
                .interact_text()
                .map_err(|e| match e {
                    dialoguer::Error::IO(io_err) => io_err,
                })?;
            return Ok(());
        }

        println!("{prompt}");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

pub struct NoPauseAcknowledger;

impl Acknowledger for NoPauseAcknowledger {
    fn acknowledge(&self, _prompt: &str) -> std::io::Result<()> {
        Ok(())
    }
}
