use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::runtime;

#[derive(Parser, Debug)]
#[command(name = "dotup")]
#[command(about = "Bootstrap dotfile symlinks and language runtimes")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create dotfile symlinks in the home directory
    Links {
        /// Dotfiles checkout to link from
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        /// Stop at the first filesystem error instead of reporting all failures
        #[arg(long)]
        fail_fast: bool,
    },
    /// Install Node.js via nodebrew
    Node {
        /// Node.js version to install
        #[arg(long, default_value = runtime::NODE_VERSION)]
        version: String,
    },
    /// Install Python via pyenv
    Pyenv {
        /// Python version to install
        #[arg(long, default_value = runtime::PYTHON_VERSION)]
        version: String,
    },
}
