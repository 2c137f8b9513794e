//! Command-line argument definitions

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

/// Visualize a git repository and its submodules as one Gource playback.
///
/// Extracts every submodule's commit history, prefixes file paths with the
/// submodule's path, merges everything into one time-sorted Gource custom
/// log, and launches gource on it.
#[derive(Parser, Debug)]
#[command(name = "subgource", version, about)]
pub struct Cli {
    /// Parent repository root (defaults to the current directory)
    #[arg(short = 'R', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Submodule names to exclude, comma separated (exact match)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "NAME",
        value_delimiter = ','
    )]
    pub exclude: Vec<String>,

    /// Directory for intermediate log files (wiped at start of each run)
    #[arg(long, value_name = "PATH", default_value = "gource_logs")]
    pub log_dir: PathBuf,

    /// Also include the parent repository's own commit history
    #[arg(long)]
    pub include_parent: bool,

    /// Write the combined log but do not launch gource
    #[arg(long)]
    pub no_launch: bool,

    /// Extra options passed through to gource verbatim (after `--`)
    #[arg(last = true, value_name = "GOURCE_ARGS")]
    pub gource_args: Vec<String>,
}

impl Cli {
    /// The exclusion set for the filter. Empty names (from stray commas)
    /// are dropped.
    pub fn exclusion_set(&self) -> HashSet<String> {
        self.exclude
            .iter()
            .filter(|n| !n.is_empty())
            .cloned()
            .collect()
    }
}
