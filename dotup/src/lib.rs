//! dotup library surface.
//!
//! This library backs the `dotup` binary: the idempotent dotfile link
//! installer, the fixed runtime-install plans, and the dependency
//! preflight. Exposed so integration tests can drive the modules directly.

pub mod catalog;
pub mod dependencies;
pub mod links;
pub mod runtime;

// Re-export key types for testing and external use
pub use links::{install_links, FailureMode, LinkResult, LinkSpec, LinkStatus};
