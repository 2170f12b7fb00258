use crate::reporting::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docrank",
    version,
    about = "Weighted PageRank for local HTML document collections"
)]
pub struct Cli {
    /// Damping factor F in [0, 1]: share of rank mass transferred via links
    #[arg(long, short = 'f', value_name = "F")]
    pub damping: Option<f64>,

    /// Corpus root directory
    #[arg(long, short = 'd', value_name = "PATH")]
    pub docs: Option<PathBuf>,

    /// Override the sweep safety bound
    #[arg(long, value_name = "N")]
    pub max_sweeps: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show corpus and convergence detail
    #[arg(long, short)]
    pub verbose: bool,
}
