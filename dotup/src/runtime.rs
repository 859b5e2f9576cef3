//! Fixed command plans for language-runtime installation.
//!
//! Each plan is a static sequence of shell commands run strictly in order;
//! the first nonzero exit aborts the rest.

use dotup_core::command_stream::run_shell_command;
use dotup_core::dot_progress;
use dotup_core::error::Result;
use dotup_messages::{msg, MESSAGES};

pub const NODE_VERSION: &str = "8.9.3";
pub const PYTHON_VERSION: &str = "3.6.3";

/// Bootstrap nodebrew, then install and select a Node.js version.
pub fn node_plan(version: &str) -> Vec<String> {
    vec![
        "curl -L git.io/nodebrew | perl - setup".to_string(),
        format!("nodebrew install {}", version),
        format!("nodebrew use {}", version),
    ]
}

/// Clone pyenv, then install and select a Python version.
pub fn pyenv_plan(version: &str) -> Vec<String> {
    vec![
        "git clone https://github.com/pyenv/pyenv.git ~/.pyenv".to_string(),
        format!("pyenv install {}", version),
        format!("pyenv global {}", version),
        "pyenv init".to_string(),
        format!("pyenv shell {}", version),
    ]
}

pub fn run_plan(commands: &[String]) -> Result<()> {
    for command in commands {
        dot_progress!("{}", msg!(MESSAGES.runtime_step, command = command.clone()));
        run_shell_command(command)?;
    }
    Ok(())
}
