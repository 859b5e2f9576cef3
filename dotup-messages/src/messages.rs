//! Central registry for all user-facing message templates.
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.
//!
//! The link report templates reproduce the historical output of the
//! bootstrap tool exactly, wording included.

pub struct Messages {
    // ============================================================================
    // Error Messages
    // ============================================================================
    pub error_generic: &'static str,

    // ============================================================================
    // Dependency Preflight Messages
    // ============================================================================
    pub deps_checking: &'static str,
    pub deps_missing: &'static str,
    pub deps_satisfied: &'static str,

    // ============================================================================
    // Link Installer Messages
    // ============================================================================
    pub link_created: &'static str,
    pub link_failed: &'static str,
    pub link_skipped: &'static str,
    pub link_source_missing: &'static str,
    pub links_failure_summary: &'static str,
    pub links_header: &'static str,

    // ============================================================================
    // Runtime Installer Messages
    // ============================================================================
    pub runtime_complete: &'static str,
    pub runtime_node_header: &'static str,
    pub runtime_pyenv_header: &'static str,
    pub runtime_step: &'static str,
}

pub const MESSAGES: Messages = Messages {
    // Error messages
    error_generic: "Error: {error}",

    // Dependency preflight
    deps_checking: "Checking required tools...",
    deps_missing: "required tool(s) not found on PATH: {tools}",
    deps_satisfied: "Dependencies satisfied",

    // Link installer
    link_created: "Create symlink to {path}",
    link_failed: "Failed ({reason})",
    link_skipped: "Skipped (file is already exists)",
    link_source_missing: "source file does not exist: {path}",
    links_failure_summary: "{count} link(s) could not be created",
    links_header: "Linking dotfiles from {repo}",

    // Runtime installers
    runtime_complete: "Runtime installation complete",
    runtime_node_header: "Installing Node.js {version} via nodebrew",
    runtime_pyenv_header: "Installing Python {version} via pyenv",
    runtime_step: "$ {command}",
};
