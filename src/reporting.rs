//! Console and JSON output for ranking results.
//!
//! The text body stays machine-readable: one `<identifier> <score>`
//! line per document, descending. Headers go to stdout, warnings to
//! stderr so piped output stays clean.

use crate::config::Config;
use crate::rank::{Convergence, RankedDoc, RankReport};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints a full ranking report in the selected format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &RankReport, format: &OutputFormat, config: &Config) -> Result<()> {
    print_warnings(report);
    match format {
        OutputFormat::Text => print_text(report, config),
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}

fn print_warnings(report: &RankReport) {
    for name in &report.zero_word_docs {
        eprintln!(
            "{} '{name}' has no extractable text; ranked by links alone",
            "warning:".yellow().bold()
        );
    }
    if report.convergence == Convergence::MaxSweepsReached {
        eprintln!(
            "{} ranking did not converge within {} sweeps; scores are best-effort",
            "warning:".yellow().bold(),
            report.sweeps
        );
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_text(report: &RankReport, config: &Config) {
    println!(
        "{}",
        format!(
            "Ranking {} documents from '{}'",
            report.doc_count,
            config.root.display()
        )
        .bold()
    );

    if config.verbose {
        println!(
            "damping {} | {} sweeps | epsilon {:.2e}",
            config.damping,
            report.sweeps,
            0.01 / report.doc_count as f64
        );
    }

    for doc in &report.rankings {
        println!("{} {:.6}", doc.name, doc.score);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    documents: &'a [RankedDoc],
    sweeps: usize,
    converged: bool,
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &RankReport) -> Result<String> {
    let json = JsonReport {
        documents: &report.rankings,
        sweeps: report.sweeps,
        converged: report.convergence == Convergence::Converged,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
