use crate::models::RiskTier;
use crate::risk::percent::extract_percentage;

/// Map a probability percentage to a risk tier.
///
/// Thresholds are closed at the lower bound: exactly 75 is VeryHigh,
/// exactly 50 is High, exactly 25 is Moderate. Everything below 25
/// (including 0 and negative garbage) is Low.
pub fn classify_percent(percent: f64) -> RiskTier {
    if percent >= 75.0 {
        RiskTier::VeryHigh
    } else if percent >= 50.0 {
        RiskTier::High
    } else if percent >= 25.0 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Classify an upstream verdict into a risk tier.
///
/// Handles:
/// - explicit probability text ("80%", "75-100%") → parsed and thresholded
/// - status phrases ("Very High Risk detected", "medium risk") → mapped to
///   representative percentages and thresholded the same way
/// - "normal conversation" → [`RiskTier::Normal`]
/// - missing / unrecognized input → [`RiskTier::Unknown`]
///
/// A non-empty probability always wins over the status text.
pub fn classify(status: Option<&str>, probability: Option<&str>) -> RiskTier {
    if let Some(prob) = probability {
        if !prob.is_empty() {
            return classify_percent(extract_percentage(prob));
        }
    }

    let lower = match status {
        Some(s) => s.to_lowercase(),
        None => return RiskTier::Unknown,
    };

    if lower.contains("very high risk") {
        return classify_percent(75.0);
    }
    // Guarded so "very high risk" and "medium-high risk" don't land here.
    if lower.contains("high risk") && !lower.contains("very") && !lower.contains("medium") {
        return classify_percent(50.0);
    }
    if lower.contains("moderate risk") || lower.contains("medium risk") {
        return classify_percent(25.0);
    }
    if lower.contains("low risk") {
        return classify_percent(10.0);
    }
    if lower.contains("normal conversation") {
        return RiskTier::Normal;
    }

    RiskTier::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify_percent(100.0), RiskTier::VeryHigh);
        assert_eq!(classify_percent(75.0), RiskTier::VeryHigh);
        assert_eq!(classify_percent(74.999), RiskTier::High);
        assert_eq!(classify_percent(50.0), RiskTier::High);
        assert_eq!(classify_percent(49.9), RiskTier::Moderate);
        assert_eq!(classify_percent(25.0), RiskTier::Moderate);
        assert_eq!(classify_percent(24.9), RiskTier::Low);
        assert_eq!(classify_percent(0.0), RiskTier::Low);
    }

    #[test]
    fn test_probability_takes_precedence() {
        assert_eq!(classify(None, Some("80%")), RiskTier::VeryHigh);
        assert_eq!(classify(Some("Low Risk"), Some("80%")), RiskTier::VeryHigh);
    }

    #[test]
    fn test_probability_range() {
        assert_eq!(classify(None, Some("75-100%")), RiskTier::VeryHigh);
        assert_eq!(classify(None, Some("30-40%")), RiskTier::Moderate);
    }

    #[test]
    fn test_empty_probability_falls_back_to_status() {
        assert_eq!(classify(Some("High Risk detected"), Some("")), RiskTier::High);
    }

    #[test]
    fn test_status_very_high() {
        assert_eq!(classify(Some("Very High Risk"), None), RiskTier::VeryHigh);
        assert_eq!(
            classify(Some("VERY HIGH RISK of fraud"), None),
            RiskTier::VeryHigh
        );
    }

    #[test]
    fn test_status_high_not_very() {
        assert_eq!(classify(Some("High Risk detected"), None), RiskTier::High);
    }

    #[test]
    fn test_status_moderate() {
        assert_eq!(classify(Some("Moderate Risk"), None), RiskTier::Moderate);
        assert_eq!(classify(Some("medium risk message"), None), RiskTier::Moderate);
    }

    #[test]
    fn test_status_low() {
        assert_eq!(classify(Some("Low Risk"), None), RiskTier::Low);
    }

    #[test]
    fn test_status_normal() {
        assert_eq!(classify(Some("Normal conversation"), None), RiskTier::Normal);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(None, None), RiskTier::Unknown);
        assert_eq!(classify(Some(""), None), RiskTier::Unknown);
        assert_eq!(classify(Some("inconclusive"), None), RiskTier::Unknown);
    }

    #[test]
    fn test_repeat_runs_identical() {
        assert_eq!(
            classify(Some("Moderate Risk"), Some("75-100%")),
            classify(Some("Moderate Risk"), Some("75-100%"))
        );
        assert_eq!(classify_percent(74.999), classify_percent(74.999));
    }
}
