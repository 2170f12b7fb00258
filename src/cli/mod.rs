// src/cli/mod.rs
//! Argument parsing and dispatch.

pub mod args;

pub use args::Cli;

use crate::config::Config;
use crate::rank::RankEngine;
use crate::reporting;
use anyhow::Result;

/// Merges CLI flags over the loaded config and runs the ranking.
///
/// # Errors
/// Returns error on invalid configuration, an empty corpus, or
/// unreadable corpus files.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(docs) = &cli.docs {
        config.root = docs.clone();
    }
    if let Some(max_sweeps) = cli.max_sweeps {
        config.max_sweeps = max_sweeps;
    }
    config.verbose = cli.verbose;
    config.validate()?;

    let engine = RankEngine::new(config.clone());
    let report = engine.rank()?;
    reporting::print_report(&report, &cli.format, &config)
}
