pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotupError {
    Filesystem(String),
    Command(String),
    Dependency(String),
    Internal(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for DotupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DotupError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            DotupError::Command(s) => write!(f, "Command failed: {}", s),
            DotupError::Dependency(s) => write!(f, "Dependency not found: {}", s),
            DotupError::Internal(s) => write!(f, "Internal error: {}", s),
            DotupError::Io(e) => write!(f, "I/O error: {}", e),
            DotupError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DotupError>;
