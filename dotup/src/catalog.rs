//! Hard-coded bootstrap configuration.
//!
//! The link table is fixed: it is not read from a file, and nothing mutates
//! it after startup. Callers pass in an absolute repo root and home
//! directory so every spec carries absolute paths.

use std::path::Path;

use crate::links::LinkSpec;

/// Dotfiles linked from the repository checkout into the home directory.
/// `Cask` lands inside `~/.emacs.d`, which must already exist.
pub fn default_link_specs(repo_root: &Path, home: &Path) -> Vec<LinkSpec> {
    vec![
        LinkSpec::new(".zshrc", repo_root.join(".zshrc"), home.join(".zshrc")),
        LinkSpec::new(
            ".gitignore_global",
            repo_root.join(".gitignore_global"),
            home.join(".gitignore_global"),
        ),
        LinkSpec::new(
            ".tmux.conf",
            repo_root.join(".tmux.conf"),
            home.join(".tmux.conf"),
        ),
        LinkSpec::new(".emacs", repo_root.join(".emacs"), home.join(".emacs")),
        LinkSpec::new(
            "Cask",
            repo_root.join("Cask"),
            home.join(".emacs.d").join("Cask"),
        ),
    ]
}
