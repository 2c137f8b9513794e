//! Data models for Subgource
//!
//! This module contains the domain structures shared by the git layer and
//! the pipeline: submodule identities and Gource log entries.

mod entry;
mod submodule;

pub use entry::{ChangeKind, FIELD_SEPARATOR, LogEntry, MalformedEntry};
pub use submodule::Submodule;
