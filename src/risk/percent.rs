use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());

/// Extract a probability percentage from free text.
///
/// Handles, in order:
/// - ranges split at the first hyphen ("75-100%" → 87.5, the average)
/// - an explicit percentage with no gap before the sign ("42%" → 42.0)
/// - the leftmost bare number ("about 60" → 60.0)
/// - nothing numeric → 0.0
pub fn extract_percentage(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    // Range: average the first number on each side of the first hyphen.
    // A side without a number counts as 0.
    if let Some((low, high)) = text.split_once('-') {
        return (first_number(low) + first_number(high)) / 2.0;
    }

    if let Some(caps) = PERCENT_RE.captures(text) {
        return caps[1].parse().unwrap_or(0.0);
    }

    first_number(text)
}

fn first_number(text: &str) -> f64 {
    NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
