use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Assessment, PolicyVerdict, RiskTier};

/// Render a colored terminal report.
pub fn render(assessments: &[Assessment], verbose: bool, quiet: bool) -> Result<()> {
    let total = assessments.len();
    let pass_count = assessments
        .iter()
        .filter(|a| a.verdict == PolicyVerdict::Pass)
        .count();
    let warn_count = assessments
        .iter()
        .filter(|a| a.verdict == PolicyVerdict::Warn)
        .count();
    let alert_count = assessments
        .iter()
        .filter(|a| a.verdict == PolicyVerdict::Alert)
        .count();

    if !quiet {
        println!("\n {} v{}", "redflagr".bold(), env!("CARGO_PKG_VERSION"));
        println!(" Assessed: {} verdict(s)\n", total);
    }

    // Summary box
    let pass_tiers = summarize_tiers(assessments, &PolicyVerdict::Pass);
    let warn_tiers = summarize_tiers(assessments, &PolicyVerdict::Warn);
    let alert_tiers = summarize_tiers(assessments, &PolicyVerdict::Alert);

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Alert: {}",
            total,
            pass_count.to_string().green(),
            warn_count.to_string().yellow(),
            alert_count.to_string().red(),
        );
        return Ok(());
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total verdicts     : {}", total));
    println!(
        " │  {:<48} │",
        format!(
            "{}  Pass            : {:>4}  {}",
            "✓".green(),
            pass_count,
            pass_tiers
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Warn            : {:>4}  {}",
            "⚠".yellow(),
            warn_count,
            warn_tiers
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Alert           : {:>4}  {}",
            "✗".red(),
            alert_count,
            alert_tiers
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    // Alert table
    if alert_count > 0 {
        println!(" {} Verdicts requiring attention:\n", "[ALERT]".red().bold());
        render_table(assessments, &PolicyVerdict::Alert);
        println!();
    }

    // Warn table
    if warn_count > 0 {
        println!(" {} Verdicts with warnings:\n", "[WARN]".yellow().bold());
        render_table(assessments, &PolicyVerdict::Warn);
        println!();
    }

    // Verbose: show all passing
    if verbose && pass_count > 0 {
        println!(" {} All passing verdicts:\n", "[PASS]".green().bold());
        render_table(assessments, &PolicyVerdict::Pass);
        println!();
    }

    Ok(())
}

fn render_table(assessments: &[Assessment], verdict_filter: &PolicyVerdict) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Tier").add_attribute(Attribute::Bold),
            Cell::new("Probability").add_attribute(Attribute::Bold),
            Cell::new("Indicators").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for a in assessments.iter().filter(|a| &a.verdict == verdict_filter) {
        let (verdict_icon, verdict_color) = match a.verdict {
            PolicyVerdict::Pass => ("✓", Color::Green),
            PolicyVerdict::Warn => ("⚠", Color::Yellow),
            PolicyVerdict::Alert => ("✗", Color::Red),
        };

        let probability = match a.percent {
            Some(p) => format!("{}%", p),
            None => "-".to_string(),
        };

        let indicators = if a.indicators.is_empty() {
            "-".to_string()
        } else {
            a.indicators.join("\n")
        };

        table.add_row(vec![
            Cell::new(&a.source),
            Cell::new(format!("{} {}", a.style.icon, a.tier)).fg(tier_color(&a.tier)),
            Cell::new(probability).set_alignment(CellAlignment::Right),
            Cell::new(indicators),
            Cell::new(format!("{} {}", verdict_icon, a.verdict))
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn tier_color(tier: &RiskTier) -> Color {
    match tier.style().color {
        "red" => Color::Red,
        "orange" => Color::DarkYellow,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "green" => Color::Green,
        _ => Color::DarkGrey,
    }
}

fn summarize_tiers(assessments: &[Assessment], verdict: &PolicyVerdict) -> String {
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for a in assessments.iter().filter(|a| &a.verdict == verdict) {
        *counts.entry(a.tier.to_string()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(label, cnt)| format!("{} ({})", label, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
