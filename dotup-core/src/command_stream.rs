// Standard library
use std::io::{BufRead, BufReader};

// External crates
use duct::cmd;
use tracing::info;

// Internal imports
use crate::error::{DotupError, Result};

/// Run a single shell command line, streaming merged stdout/stderr to the
/// terminal. Commands run under `sh -c` because the bootstrap plans contain
/// shell pipelines. A nonzero exit status maps to a command error carrying
/// the full command line for debugging.
pub fn run_shell_command(cmdline: &str) -> Result<()> {
    info!("running: {}", cmdline);

    let reader = cmd("sh", vec!["-c", cmdline])
        .stderr_to_stdout()
        .reader()
        .map_err(|e| DotupError::Command(format!("{}: {}", cmdline, e)))?;

    // The reader surfaces a nonzero exit status as an error at EOF.
    for line in BufReader::new(reader).lines() {
        match line {
            Ok(line) => println!("{}", line),
            Err(e) => return Err(DotupError::Command(format!("{}: {}", cmdline, e))),
        }
    }

    Ok(())
}
