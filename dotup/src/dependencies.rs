use dotup_core::error::{DotupError, Result};
use dotup_core::{dot_progress, dot_success};
use dotup_messages::{msg, MESSAGES};
use which::which;

/// Verify the external tools a plan shells out to are on PATH before any
/// command runs.
pub fn check(tools: &[&str]) -> Result<()> {
    dot_progress!("{}", MESSAGES.deps_checking);

    let missing: Vec<&str> = tools
        .iter()
        .copied()
        .filter(|tool| which(tool).is_err())
        .collect();

    if !missing.is_empty() {
        return Err(DotupError::Dependency(msg!(
            MESSAGES.deps_missing,
            tools = missing.join(", ")
        )));
    }

    dot_success!("{}", MESSAGES.deps_satisfied);
    Ok(())
}
