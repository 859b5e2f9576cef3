use dotup_core::error::Result;
use dotup_core::{dot_info, dot_success};
use dotup_messages::{msg, MESSAGES};

use crate::dependencies;
use crate::runtime;

pub fn run(version: &str) -> Result<()> {
    dependencies::check(&["curl", "perl"])?;

    dot_info!("{}", msg!(MESSAGES.runtime_node_header, version = version));
    runtime::run_plan(&runtime::node_plan(version))?;

    dot_success!("{}", MESSAGES.runtime_complete);
    Ok(())
}
