//! Gource invocation layer
//!
//! A pure invocation boundary: hands the combined log to the external
//! `gource` tool without transforming it.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// gource command binary name
pub const GOURCE_COMMAND: &str = "gource";

/// Options always passed before the caller's pass-through list, so the
/// caller can override them.
///
/// `--hide root` suppresses the synthetic root node: the combined tree is
/// rooted at multiple submodule namespaces, not a single repository root.
const DEFAULT_ARGS: &[&str] = &[
    "--hide",
    "root",
    "--highlight-users",
    "--auto-skip-seconds",
    "1",
    "--seconds-per-day",
    "0.1",
    "--file-idle-time",
    "0",
    "--stop-at-end",
    "--title",
    "Repository + Submodules",
];

/// Errors that can occur when launching gource
#[derive(Error, Debug)]
pub enum GourceError {
    #[error("gource is not installed or not in PATH")]
    GourceNotFound,

    #[error("gource exited with status {0}")]
    ExitedWithFailure(i32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Launcher for the gource visualization
#[derive(Debug, Clone, Default)]
pub struct GourceExecutor {
    /// Extra options forwarded verbatim after the defaults
    passthrough: Vec<String>,
}

impl GourceExecutor {
    /// Create a launcher with caller-supplied pass-through options.
    ///
    /// The options are opaque here; gource itself validates them.
    pub fn new(passthrough: Vec<String>) -> Self {
        Self { passthrough }
    }

    /// Launch gource on the combined log and wait for it to exit.
    ///
    /// Stdio is inherited so gource can drive its own window and progress
    /// output.
    pub fn launch(&self, combined_log: &Path) -> Result<(), GourceError> {
        let status = Command::new(GOURCE_COMMAND)
            .arg(combined_log)
            .args(DEFAULT_ARGS)
            .args(&self.passthrough)
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GourceError::GourceNotFound
                } else {
                    GourceError::IoError(e)
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(GourceError::ExitedWithFailure(status.code().unwrap_or(-1)))
        }
    }
}
