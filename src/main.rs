//! Subgource - combined Gource logs for repositories with submodules
//!
//! Binary entry point for the pipeline.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use subgource::cli::Cli;
use subgource::git::GitExecutor;
use subgource::gource::GourceExecutor;
use subgource::pipeline::{self, RunContext};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let executor = match cli.repo.clone() {
        Some(path) => GitExecutor::with_repo_path(path),
        None => GitExecutor::new(),
    };

    let ctx = RunContext::create(&cli.log_dir)?;
    info!(dir = %ctx.dir().display(), "intermediate logs");

    let summary = pipeline::run(&executor, &ctx, &cli.exclusion_set(), cli.include_parent)?;

    if !summary.skipped.is_empty() {
        warn!(skipped = ?summary.skipped, "some submodules were skipped");
    }
    if summary.parent_skipped {
        warn!("parent repository history was requested but skipped");
    }
    info!(
        submodules = summary.extracted.len(),
        entries = summary.entries,
        log = %summary.combined_log.display(),
        "combined log written"
    );

    if cli.no_launch {
        return Ok(());
    }
    if summary.entries == 0 {
        info!("nothing to visualize");
        return Ok(());
    }

    GourceExecutor::new(cli.gource_args.clone()).launch(&summary.combined_log)?;

    Ok(())
}
