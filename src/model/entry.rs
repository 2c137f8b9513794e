//! Gource log entry data model
//!
//! One entry is one file change event. On the wire (the Gource custom log
//! format) an entry is a single pipe-delimited line:
//!
//! ```text
//! <timestamp>|<author>|<A|M|D>|<path>
//! ```
//!
//! The path is always the final field and is parsed greedily, so a path
//! containing `|` survives a round trip. The first three fields must not
//! contain the delimiter; [`LogEntry::to_line`] sanitizes the author field
//! to keep that guarantee.

use thiserror::Error;

/// Separator between fields of a Gource custom log record
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a well-formed record
const FIELD_COUNT: usize = 4;

/// Kind of change a log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was added
    Added,

    /// File was modified
    Modified,

    /// File was deleted
    Deleted,
}

impl ChangeKind {
    /// The single-letter code used both by `git log --name-status` and by
    /// the Gource log format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "A",
            ChangeKind::Modified => "M",
            ChangeKind::Deleted => "D",
        }
    }

    /// Parse a status code. Returns `None` for codes outside the supported
    /// set (renames and copies carry score suffixes like `R100` and are
    /// not representable in the Gource format).
    pub fn from_status(code: &str) -> Option<Self> {
        match code {
            "A" => Some(ChangeKind::Added),
            "M" => Some(ChangeKind::Modified),
            "D" => Some(ChangeKind::Deleted),
            _ => None,
        }
    }
}

/// A single change event in a Gource log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Seconds since the epoch (committer time)
    pub timestamp: i64,

    /// Author name, free text
    pub author: String,

    /// What happened to the file
    pub change_kind: ChangeKind,

    /// Affected file path; relative to the submodule root before
    /// namespacing, relative to the combined virtual tree after
    pub path: String,
}

/// A log line that does not parse as a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed entry at line {line}: {content:?}")]
pub struct MalformedEntry {
    /// 1-based line number within the source log file
    pub line: usize,

    /// The offending line, verbatim
    pub content: String,
}

impl LogEntry {
    /// Parse one log line.
    ///
    /// `line_number` is carried into the error for diagnostics. The line is
    /// split into at most [`FIELD_COUNT`] fields, so any delimiter inside
    /// the path field stays part of the path.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self, MalformedEntry> {
        let malformed = || MalformedEntry {
            line: line_number,
            content: line.to_string(),
        };

        let mut fields = line.splitn(FIELD_COUNT, FIELD_SEPARATOR);
        let timestamp = fields.next().ok_or_else(malformed)?;
        let author = fields.next().ok_or_else(malformed)?;
        let kind = fields.next().ok_or_else(malformed)?;
        let path = fields.next().ok_or_else(malformed)?;

        let timestamp: i64 = timestamp.trim().parse().map_err(|_| malformed())?;
        let change_kind = ChangeKind::from_status(kind).ok_or_else(malformed)?;

        Ok(LogEntry {
            timestamp,
            author: author.to_string(),
            change_kind,
            path: path.to_string(),
        })
    }

    /// Format as one Gource log line (no trailing newline).
    ///
    /// Delimiters inside the author name are replaced with `:` so the path
    /// remains the only field that may contain `|`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.timestamp,
            self.author.replace(FIELD_SEPARATOR, ":"),
            self.change_kind.as_str(),
            self.path,
            sep = FIELD_SEPARATOR,
        )
    }
}
