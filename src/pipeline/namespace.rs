//! Path namespacer
//!
//! Rewrites every entry of a per-submodule log so its path lives under the
//! submodule's relative path. Two submodules can then never collide even
//! when they contain files with identical relative paths; the prefix is
//! the full path (not just the final segment) because same-named
//! submodules can exist under different parent directories.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use super::write_atomic;
use crate::model::LogEntry;

/// Rewrite a per-submodule log file in place, prefixing every entry's path
/// with `prefix/`, the owning submodule's relative path. Timestamp,
/// author, and change kind are untouched.
///
/// Malformed lines are skipped with a warning; the count of kept entries is
/// returned. The rewrite is atomic.
pub fn namespace_log(path: &Path, prefix: &str) -> io::Result<usize> {
    let raw = fs::read_to_string(path)?;
    let mut contents = String::with_capacity(raw.len() + prefix.len());
    let mut kept = 0;

    for (idx, line) in raw.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match LogEntry::parse_line(line, idx + 1) {
            Ok(mut entry) => {
                entry.path = namespaced(prefix, &entry.path);
                contents.push_str(&entry.to_line());
                contents.push('\n');
                kept += 1;
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping malformed entry");
            }
        }
    }

    write_atomic(path, &contents)?;
    Ok(kept)
}

/// Prefix a raw path with the submodule's relative path.
///
/// Leading separators are stripped first so an absolute-looking path still
/// lands under the namespace. An empty path becomes just the identity
/// itself.
fn namespaced(prefix: &str, raw: &str) -> String {
    let trimmed = raw.trim_start_matches('/');
    if trimmed.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}/{trimmed}")
    }
}
