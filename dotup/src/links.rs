// Standard library
use std::path::{Path, PathBuf};

// External crates
use tracing::debug;

// Internal imports
use dotup_core::dot_println;
use dotup_core::error::{DotupError, Result};
use dotup_messages::{msg, MESSAGES};

/// One desired symbolic link. The full set is fixed at startup from the
/// hard-coded catalog; both paths are absolute by then.
#[derive(Debug, Clone)]
pub struct LinkSpec {
    pub title: String,
    pub source_path: PathBuf,
    pub link_path: PathBuf,
}

impl LinkSpec {
    pub fn new(title: impl Into<String>, source_path: PathBuf, link_path: PathBuf) -> Self {
        Self {
            title: title.into(),
            source_path,
            link_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// A new symlink was created at `link_path`.
    Created { link_path: PathBuf },
    /// The link path was already occupied; the filesystem was not touched.
    Skipped,
    /// The entry could not be installed (missing source, missing parent
    /// directory, permissions). Recorded, not raised.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct LinkResult {
    pub title: String,
    pub status: LinkStatus,
}

impl LinkResult {
    /// Render the per-entry report line: the bracketed title left-padded to
    /// a 20-column field, then the status message.
    pub fn render(&self) -> String {
        let label = format!("[{}]", self.title);
        let message = match &self.status {
            LinkStatus::Created { link_path } => msg!(
                MESSAGES.link_created,
                path = link_path.display().to_string()
            ),
            LinkStatus::Skipped => MESSAGES.link_skipped.to_string(),
            LinkStatus::Failed { reason } => msg!(MESSAGES.link_failed, reason = reason.clone()),
        };
        format!("{:<20} {}", label, message)
    }
}

/// How a failed entry affects the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Record the failure and keep processing the remaining entries.
    Continue,
    /// Propagate the first filesystem error and stop.
    Abort,
}

/// Install every link in order, printing one report line per entry as it is
/// processed. An aborted run therefore still shows everything done before
/// the failure.
pub fn install_links(specs: &[LinkSpec], mode: FailureMode) -> Result<Vec<LinkResult>> {
    let mut results = Vec::with_capacity(specs.len());

    for spec in specs {
        let result = install_one(spec, mode)?;
        dot_println!("{}", result.render());
        results.push(result);
    }

    Ok(results)
}

fn install_one(spec: &LinkSpec, mode: FailureMode) -> Result<LinkResult> {
    // A missing source would produce a dangling link; record it as a
    // per-entry failure instead of creating one.
    if !spec.source_path.exists() {
        debug!(
            "source missing for {}: {}",
            spec.title,
            spec.source_path.display()
        );
        return Ok(LinkResult {
            title: spec.title.clone(),
            status: LinkStatus::Failed {
                reason: msg!(
                    MESSAGES.link_source_missing,
                    path = spec.source_path.display().to_string()
                ),
            },
        });
    }

    // exists() dereferences symlinks, so a dangling link at the target
    // needs the extra is_symlink() check to count as occupied.
    if spec.link_path.exists() || spec.link_path.is_symlink() {
        return Ok(LinkResult {
            title: spec.title.clone(),
            status: LinkStatus::Skipped,
        });
    }

    match symlink_file(&spec.source_path, &spec.link_path) {
        Ok(()) => Ok(LinkResult {
            title: spec.title.clone(),
            status: LinkStatus::Created {
                link_path: spec.link_path.clone(),
            },
        }),
        Err(e) => {
            let reason = format!("{}: {}", spec.link_path.display(), e);
            match mode {
                FailureMode::Abort => Err(DotupError::Filesystem(reason)),
                FailureMode::Continue => Ok(LinkResult {
                    title: spec.title.clone(),
                    status: LinkStatus::Failed { reason },
                }),
            }
        }
    }
}

#[cfg(unix)]
fn symlink_file(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn symlink_file(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(source, link)
}
