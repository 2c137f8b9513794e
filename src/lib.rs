//! Subgource - combined Gource logs for repositories with submodules
//!
//! Aggregates the commit histories of a parent git repository's submodules
//! into one time-sorted Gource custom log and launches the visualization.
//!
//! This library provides:
//! - [`cli`]: Command-line argument definitions
//! - [`git`]: Git command execution and parsing
//! - [`gource`]: Gource invocation
//! - [`model`]: Domain models
//! - [`pipeline`]: The extract / namespace / combine pipeline

pub mod cli;
pub mod git;
pub mod gource;
pub mod model;
pub mod pipeline;
