//! History output parser (git log --name-status)

use tracing::warn;

use super::Parser;
use crate::git::constants::special;
use crate::model::{ChangeKind, LogEntry};

impl Parser {
    /// Parse the output of `git log --pretty=format:user:%aN%x09%ct
    /// --name-status` into change events.
    ///
    /// The stream alternates between commit headers and file lines:
    /// - `user:<author>\t<epoch>` starts a new commit
    /// - `<A|M|D>\t<path>` records one file change of the current commit
    ///
    /// Lenient by design: rename/copy lines (`R100`, `C75`, ...), blank
    /// lines, and file lines before any header are skipped; a header with
    /// an unparseable epoch drops that commit's files with a warning.
    pub fn parse_log(output: &str) -> Vec<LogEntry> {
        let mut entries = Vec::new();
        // (author, epoch) of the commit currently being walked
        let mut current: Option<(String, i64)> = None;

        for line in output.lines() {
            let line = line.trim_end();

            if let Some(header) = line.strip_prefix(special::USER_PREFIX) {
                // rsplit keeps tabs inside the author name, if any
                current = match header.rsplit_once('\t') {
                    Some((author, epoch)) => match epoch.trim().parse::<i64>() {
                        Ok(epoch) => Some((author.to_string(), epoch)),
                        Err(_) => {
                            warn!(header = %line, "skipping commit with unparseable timestamp");
                            None
                        }
                    },
                    None => {
                        warn!(header = %line, "skipping commit header without timestamp");
                        None
                    }
                };
            } else if let Some((code, path)) = line.split_once('\t') {
                let Some(change_kind) = ChangeKind::from_status(code) else {
                    continue;
                };
                if path.is_empty() {
                    continue;
                }
                if let Some((author, timestamp)) = &current {
                    entries.push(LogEntry {
                        timestamp: *timestamp,
                        author: author.clone(),
                        change_kind,
                        path: path.to_string(),
                    });
                }
            }
        }

        entries
    }
}
