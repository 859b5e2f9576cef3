use clap::Parser;
use dotup_core::dot_error;
use dotup_core::error::Result;
use dotup_messages::{msg, MESSAGES};

mod catalog;
mod cli;
mod commands;
mod dependencies;
mod links;
mod runtime;

use cli::Args;
use commands::execute_command;

fn main() {
    dotup_core::logging::init_logging();

    if let Err(e) = run() {
        dot_error!("{}", msg!(MESSAGES.error_generic, error = e.to_string()));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    execute_command(args)
}
