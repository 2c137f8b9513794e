//! Per-submodule history extraction
//!
//! Runs the history command inside one submodule, parses the change events,
//! and persists them as an intermediate log file named deterministically by
//! the submodule's identity. Rerunning overwrites the same file.

use std::path::PathBuf;

use tracing::debug;

use super::{PipelineError, RunContext, write_atomic};
use crate::git::{GitError, GitExecutor, parser::Parser};
use crate::model::{LogEntry, Submodule};

/// Extract one submodule's full history into its intermediate log file.
///
/// The written entries are raw (paths relative to the submodule root);
/// namespacing is a separate pass.
pub fn extract_submodule(
    executor: &GitExecutor,
    ctx: &RunContext,
    submodule: &Submodule,
) -> Result<PathBuf, PipelineError> {
    // An uninitialized submodule has no .git entry; running git there
    // would discover the parent repository instead and extract the wrong
    // history.
    if !executor.root().join(&submodule.path).join(".git").exists() {
        return Err(PipelineError::Git(GitError::NotARepository));
    }

    let log_path = ctx.submodule_log(submodule);
    let entries = extract_history(executor, &submodule.path)?;
    debug!(
        submodule = %submodule.name,
        entries = entries.len(),
        "extracted submodule history"
    );
    write_entries(&log_path, &entries)?;
    Ok(log_path)
}

/// Extract the parent repository's own history.
///
/// Parent paths are already relative to the combined virtual tree, so the
/// resulting log needs no namespacing pass.
pub fn extract_parent(executor: &GitExecutor, ctx: &RunContext) -> Result<PathBuf, PipelineError> {
    let log_path = ctx.parent_log();
    let entries = extract_history(executor, ".")?;
    debug!(entries = entries.len(), "extracted parent history");
    write_entries(&log_path, &entries)?;
    Ok(log_path)
}

fn extract_history(executor: &GitExecutor, subpath: &str) -> Result<Vec<LogEntry>, PipelineError> {
    let refname = executor.branch_name(subpath);
    let raw = executor.log_raw(subpath, &refname)?;
    Ok(Parser::parse_log(&raw))
}

fn write_entries(path: &std::path::Path, entries: &[LogEntry]) -> Result<(), PipelineError> {
    let mut contents = String::new();
    for entry in entries {
        contents.push_str(&entry.to_line());
        contents.push('\n');
    }
    write_atomic(path, &contents)?;
    Ok(())
}
