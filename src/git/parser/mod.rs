//! git output parser
//!
//! Parses the output from git commands into structured data.

mod log;
mod submodule;


/// Parser for git command output
pub struct Parser;
