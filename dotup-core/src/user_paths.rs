use std::path::PathBuf;

use crate::error::{DotupError, Result};

/// Resolve the user's home directory, where dotfile links land.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| DotupError::Internal("Could not find home directory".to_string()))
}
