//! Log combiner
//!
//! Concatenates the namespaced per-submodule logs and writes one merged
//! log sorted ascending by timestamp.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{PipelineError, write_atomic};
use crate::model::LogEntry;

/// Merge the given log files into `output`, sorted by numeric timestamp.
///
/// The sort is stable and inputs are read in the order given (submodule
/// discovery order), so entries with equal timestamps keep a deterministic
/// order: discovery order first, then original within-submodule order.
/// Zero inputs produce an empty combined log. Returns the number of merged
/// entries. The write is atomic.
pub fn combine_logs(inputs: &[PathBuf], output: &Path) -> Result<usize, PipelineError> {
    let mut entries = Vec::new();

    for input in inputs {
        let raw = fs::read_to_string(input)?;
        for (idx, line) in raw.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match LogEntry::parse_line(line, idx + 1) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(file = %input.display(), error = %e, "skipping malformed entry");
                }
            }
        }
    }

    // Numeric, not lexicographic: "9" must sort before "10"
    entries.sort_by_key(|e| e.timestamp);

    let mut contents = String::new();
    for entry in &entries {
        contents.push_str(&entry.to_line());
        contents.push('\n');
    }
    write_atomic(output, &contents)?;

    Ok(entries.len())
}
