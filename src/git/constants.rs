//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const SUBMODULE: &str = "submodule";
    pub const STATUS: &str = "status";
    pub const LOG: &str = "log";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const CHDIR: &str = "-C";
    /// Disable color output for parsing (config override, safe everywhere)
    pub const NO_COLOR: &str = "-c";
    /// Value for [`NO_COLOR`]
    pub const NO_COLOR_VALUE: &str = "color.ui=never";
    /// Resolve a symbolic ref name instead of an object id
    pub const ABBREV_REF: &str = "--abbrev-ref";
    /// Emit per-commit file status letters
    pub const NAME_STATUS: &str = "--name-status";
}

/// Special git values and formats
pub mod special {
    /// `git log` pretty format: one header line per commit carrying the
    /// author name and committer epoch, tab separated.
    ///
    /// The `user:` prefix distinguishes header lines from the
    /// `--name-status` file lines that follow each commit.
    pub const LOG_PRETTY_FORMAT: &str = "--pretty=format:user:%aN%x09%ct";

    /// Prefix of a commit header line in log output
    pub const USER_PREFIX: &str = "user:";

    /// Symbolic name git reports for a detached HEAD
    pub const DETACHED_HEAD: &str = "HEAD";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository (stderr of most commands)
    pub const NOT_A_REPO: &str = "not a git repository";
}
