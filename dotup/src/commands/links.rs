use std::fs;
use std::path::Path;

use dotup_core::error::{DotupError, Result};
use dotup_core::{dot_info, dot_warning, user_paths};
use dotup_messages::{msg, MESSAGES};

use crate::catalog;
use crate::links::{install_links, FailureMode, LinkStatus};

pub fn run(repo: &Path, fail_fast: bool) -> Result<()> {
    // Specs carry absolute paths only; canonicalize the checkout up front.
    let repo_root = fs::canonicalize(repo)
        .map_err(|e| DotupError::Filesystem(format!("{}: {}", repo.display(), e)))?;
    let home = user_paths::home_dir()?;

    dot_info!(
        "{}",
        msg!(MESSAGES.links_header, repo = repo_root.display().to_string())
    );

    let mode = if fail_fast {
        FailureMode::Abort
    } else {
        FailureMode::Continue
    };
    let specs = catalog::default_link_specs(&repo_root, &home);
    let results = install_links(&specs, mode)?;

    let failed = results
        .iter()
        .filter(|r| matches!(r.status, LinkStatus::Failed { .. }))
        .count();
    if failed > 0 {
        dot_warning!(
            "{}",
            msg!(MESSAGES.links_failure_summary, count = failed.to_string())
        );
        return Err(DotupError::Filesystem(format!(
            "{} dotfile link(s) failed",
            failed
        )));
    }

    Ok(())
}
