//! The extract / namespace / combine pipeline
//!
//! Orchestrates the whole run: enumerate submodules, drop excluded ones,
//! extract each retained submodule's history into a run-scoped intermediate
//! directory, namespace the paths, and merge everything into one
//! time-sorted combined log.

mod combine;
mod extract;
mod filter;
mod namespace;

pub use combine::combine_logs;
pub use extract::{extract_parent, extract_submodule};
pub use filter::filter_excluded;
pub use namespace::namespace_log;

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::git::{GitError, GitExecutor, parser::Parser};
use crate::model::Submodule;

/// File name of the merged output inside the run directory
const COMBINED_LOG_FILE: &str = "combined.log";

/// Log file used for the parent repository's own history, the
/// sanitization of its pseudo-path ".".
const PARENT_LOG_FILE: &str = "_.log";

/// Fatal pipeline errors.
///
/// Per-submodule extraction failures and malformed log lines are not here:
/// those degrade gracefully (skip and warn) so one broken submodule never
/// blocks visualizing the rest.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Run-scoped intermediate state: one directory holding one log file per
/// retained submodule plus the combined log.
///
/// Owned exclusively by one run; wiped on creation so stale logs never leak
/// across runs.
#[derive(Debug)]
pub struct RunContext {
    log_dir: PathBuf,
}

impl RunContext {
    /// Create the intermediate directory, removing any previous contents.
    pub fn create(log_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let log_dir = log_dir.into();
        match fs::remove_dir_all(&log_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::create_dir_all(&log_dir)?;
        Ok(Self { log_dir })
    }

    /// The intermediate directory
    pub fn dir(&self) -> &Path {
        &self.log_dir
    }

    /// Intermediate log path for one submodule
    pub fn submodule_log(&self, submodule: &Submodule) -> PathBuf {
        self.log_dir.join(submodule.log_file_name())
    }

    /// Intermediate log path for the parent repository's own history
    pub fn parent_log(&self) -> PathBuf {
        self.log_dir.join(PARENT_LOG_FILE)
    }

    /// Path of the merged output
    pub fn combined_log(&self) -> PathBuf {
        self.log_dir.join(COMBINED_LOG_FILE)
    }
}

/// What a pipeline run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Names of submodules whose history made it into the combined log
    pub extracted: Vec<String>,

    /// Names of submodules skipped because extraction failed
    pub skipped: Vec<String>,

    /// True when parent history was requested but could not be extracted
    pub parent_skipped: bool,

    /// Total entries in the combined log
    pub entries: usize,

    /// Where the combined log was written
    pub combined_log: PathBuf,
}

/// Run the whole pipeline.
///
/// Fails fast only when the parent directory is not a repository (or git
/// itself is unusable); everything downstream degrades per submodule.
pub fn run(
    executor: &GitExecutor,
    ctx: &RunContext,
    exclude: &HashSet<String>,
    include_parent: bool,
) -> Result<RunSummary, PipelineError> {
    let listing = executor.submodule_status_raw()?;
    let submodules = Parser::parse_submodule_status(&listing)?;
    let retained = filter_excluded(submodules, exclude);

    if retained.is_empty() && !include_parent {
        info!("no submodules found; combined log will be empty");
    }

    let mut inputs = Vec::new();
    let mut extracted = Vec::new();
    let mut skipped = Vec::new();
    let mut parent_skipped = false;

    // Parent history first, matching its position in the virtual tree root
    if include_parent {
        match extract_parent(executor, ctx) {
            Ok(path) => inputs.push(path),
            Err(e) => {
                warn!(error = %e, "failed to extract parent repository history");
                parent_skipped = true;
            }
        }
    }

    for submodule in &retained {
        // Namespace with the full relative path: final segments alone can
        // collide (libs/core vs vendor/core)
        let result = extract_submodule(executor, ctx, submodule).and_then(|path| {
            namespace_log(&path, &submodule.path)
                .map(|_| path)
                .map_err(PipelineError::from)
        });
        match result {
            Ok(path) => {
                inputs.push(path);
                extracted.push(submodule.name.clone());
            }
            Err(e) => {
                warn!(
                    submodule = %submodule.name,
                    path = %submodule.path,
                    error = %e,
                    "skipping submodule: extraction failed"
                );
                skipped.push(submodule.name.clone());
            }
        }
    }

    let combined_log = ctx.combined_log();
    let entries = combine_logs(&inputs, &combined_log)?;

    Ok(RunSummary {
        extracted,
        skipped,
        parent_skipped,
        entries,
        combined_log,
    })
}

/// Write a file atomically (temp file in the same directory, then rename)
/// so a crash mid-write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_context_wipes_stale_state() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");

        fs::create_dir_all(&log_dir).unwrap();
        fs::write(log_dir.join("stale.log"), "1|a|A|x\n").unwrap();

        let ctx = RunContext::create(&log_dir).unwrap();
        assert!(ctx.dir().exists());
        assert!(!log_dir.join("stale.log").exists());
    }

    #[test]
    fn test_run_context_paths() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::create(dir.path().join("logs")).unwrap();
        let sub = Submodule::new("libs/alpha");

        assert_eq!(ctx.submodule_log(&sub), ctx.dir().join("libs_alpha.log"));
        assert_eq!(ctx.combined_log(), ctx.dir().join("combined.log"));
    }

    #[test]
    fn test_parent_log_does_not_alias_a_submodule_log() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::create(dir.path().join("logs")).unwrap();

        assert_ne!(ctx.parent_log(), ctx.submodule_log(&Submodule::new("_x")));
        assert_eq!(ctx.parent_log().file_name().unwrap(), "_.log");
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.log");

        write_atomic(&path, "first\n").unwrap();
        write_atomic(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
