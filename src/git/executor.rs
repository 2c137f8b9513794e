//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags, special};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the parent repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Root of the parent repository
    pub fn root(&self) -> PathBuf {
        self.repo_path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Run a git command in the given directory.
    ///
    /// Automatically adds `-c color.ui=never` to ensure parseable output.
    fn run_in(&self, dir: &Path, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        cmd.arg(flags::CHDIR).arg(dir);
        cmd.arg(flags::NO_COLOR).arg(flags::NO_COLOR_VALUE);
        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            // Check for common error patterns
            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run a git command in the parent repository root
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.run_in(&self.root(), args)
    }

    /// Run a git command inside a submodule (path relative to the root)
    pub fn run_in_submodule(&self, subpath: &str, args: &[&str]) -> Result<String, GitError> {
        self.run_in(&self.root().join(subpath), args)
    }

    /// Run `git submodule status` and return the raw listing.
    ///
    /// Order of the output is git's own listing order and becomes the
    /// tie-break order for the combined log.
    pub fn submodule_status_raw(&self) -> Result<String, GitError> {
        self.run(&[commands::SUBMODULE, commands::STATUS])
    }

    /// Resolve the ref to walk for a submodule's history.
    ///
    /// Returns the current branch name, or the commit hash when HEAD is
    /// detached, or the literal "HEAD" if resolution fails (a later log
    /// call will then surface the real error).
    pub fn branch_name(&self, subpath: &str) -> String {
        let head = self.run_in_submodule(
            subpath,
            &[commands::REV_PARSE, flags::ABBREV_REF, special::DETACHED_HEAD],
        );

        match head {
            Ok(name) => {
                let name = name.trim().to_string();
                if name == special::DETACHED_HEAD {
                    // Detached HEAD, fall back to the commit hash
                    self.run_in_submodule(subpath, &[commands::REV_PARSE, special::DETACHED_HEAD])
                        .map(|h| h.trim().to_string())
                        .unwrap_or(name)
                } else {
                    name
                }
            }
            Err(_) => special::DETACHED_HEAD.to_string(),
        }
    }

    /// Run `git log` in a submodule with the change-event format.
    ///
    /// Output is one `user:<author>\t<epoch>` header per commit followed by
    /// the commit's `--name-status` file lines; see
    /// [`Parser::parse_log`](super::parser::Parser::parse_log).
    pub fn log_raw(&self, subpath: &str, refname: &str) -> Result<String, GitError> {
        self.run_in_submodule(
            subpath,
            &[
                commands::LOG,
                special::LOG_PRETTY_FORMAT,
                flags::NAME_STATUS,
                refname,
            ],
        )
    }
}
