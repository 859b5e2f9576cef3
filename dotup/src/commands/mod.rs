mod links;
mod node;
mod pyenv;

use crate::cli::{Args, Command};
use dotup_core::error::Result;

pub fn execute_command(args: Args) -> Result<()> {
    match args.command {
        Command::Links { repo, fail_fast } => links::run(&repo, fail_fast),
        Command::Node { version } => node::run(&version),
        Command::Pyenv { version } => pyenv::run(&version),
    }
}
