//! Submodule listing parser (git submodule status)

use regex::Regex;
use std::sync::LazyLock;

use super::Parser;
use crate::git::GitError;
use crate::model::Submodule;

/// Regex for one `git submodule status` line
/// Format: `<state?><sha> <path> (<describe>)`
/// Example: ` 4b825dc642cb6eb9a060e54bf8d69288fbee4904 libs/alpha (heads/main)`
///
/// Groups:
/// 1. sha (hex, 7-64 chars; covers abbreviated and sha256 object ids)
/// 2. path (non-greedy, so paths with spaces survive)
///
/// The state prefix is ` ` (in sync), `+` (checked-out commit differs),
/// `-` (not initialized) or `U` (merge conflicts). The trailing describe
/// suffix is absent for uninitialized submodules.
///
/// The line format is genuinely ambiguous for a path that itself ends in
/// ` (text)`: nothing separates it from a describe suffix, so the
/// describe reading wins and the parenthesized tail is dropped from the
/// path.
static STATUS_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ +\-U]?([0-9a-f]{7,64})\s+(.+?)(?:\s+\([^)]*\))?$")
        .expect("Invalid submodule status regex")
});

impl Parser {
    /// Parse `git submodule status` output into submodule records.
    ///
    /// Empty output (a repository with no submodules) yields an empty list,
    /// not an error. Input order is preserved.
    pub fn parse_submodule_status(output: &str) -> Result<Vec<Submodule>, GitError> {
        let mut submodules = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let captures = STATUS_LINE_REGEX.captures(line).ok_or_else(|| {
                GitError::ParseError(format!("unrecognized submodule status line: {line:?}"))
            })?;

            submodules.push(Submodule::new(&captures[2]));
        }

        Ok(submodules)
    }
}
