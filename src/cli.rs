use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "redflagr",
    about = "Distill AI scam-analysis verdicts into risk tiers and red-flag indicators",
    version
)]
pub struct Cli {
    /// Verdict files to assess; use - to read from stdin
    #[arg(default_value = "-")]
    pub inputs: Vec<PathBuf>,

    /// Policy config file [default: ./.redflagr/config.toml, fallback ~/.config/redflagr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show all assessments (not just warnings/alerts)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
