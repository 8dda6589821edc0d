//! `redflagr` — distill AI scam-analysis verdicts into risk tiers and red-flag indicators.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load policy config ([`config::load_config`]).
//! 3. Read each verdict file, or stdin ([`input`]).
//! 4. Classify status/probability into a risk tier ([`risk`]).
//! 5. Extract red-flag indicators from the explanation ([`indicator`]).
//! 6. Apply the tier policy ([`config::apply_policy`]).
//! 7. Render the requested report ([`report`]).
//! 8. Exit `0` (clean) or `1` (at least one [`models::PolicyVerdict::Alert`]).

mod cli;
mod config;
mod indicator;
mod input;
mod models;
mod report;
mod risk;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use config::{apply_policy, load_config};
use indicator::extractor::extract_indicators;
use models::{Assessment, PolicyVerdict};
use risk::percent::extract_percentage;
use risk::tier::classify;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load policy config
    let config = load_config(std::path::Path::new("."), cli.config.as_deref())?;

    // Assess each input independently, in order
    let mut assessments = Vec::new();

    for path in &cli.inputs {
        let (source, verdict) = input::load_verdict(path)?;

        let tier = classify(verdict.status.as_deref(), verdict.probability.as_deref());
        let percent = verdict
            .probability
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(extract_percentage);
        let indicators = verdict
            .explanation
            .as_deref()
            .map(extract_indicators)
            .unwrap_or_default();
        let policy = apply_policy(&config, &tier);

        if !cli.quiet {
            eprintln!(
                "  {} {} {} {} indicators",
                "→".cyan(),
                source,
                tier.style().icon,
                indicators.len()
            );
        }

        assessments.push(Assessment {
            source,
            style: tier.style(),
            tier,
            percent,
            indicators,
            verdict: policy,
        });
    }

    // Render report
    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&assessments, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessments)?);
        }
    }

    // Exit code: 1 if any alert verdict found
    let has_alerts = assessments
        .iter()
        .any(|a| a.verdict == PolicyVerdict::Alert);

    if has_alerts {
        std::process::exit(1);
    }

    Ok(())
}
