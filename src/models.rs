use serde::{Deserialize, Serialize};

/// Raw verdict emitted by the upstream scam classifier. All fields are
/// untrusted free text; any of them may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub status: Option<String>,
    pub probability: Option<String>,
    pub explanation: Option<String>,
}

/// One assessed verdict, ready for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub source: String,
    pub tier: RiskTier,
    pub style: TierStyle,
    pub percent: Option<f64>,
    pub indicators: Vec<String>,
    pub verdict: PolicyVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskTier {
    VeryHigh,
    High,
    Moderate,
    Low,
    Normal,
    Unknown,
}

/// Display metadata attached to a [`RiskTier`]. All fields are static
/// strings; `classes` carries the utility-class tokens consumed by web
/// frontends that embed the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct TierStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub classes: TierClasses,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierClasses {
    pub container: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
    pub bar: &'static str,
}

impl RiskTier {
    /// Fixed display metadata for this tier.
    pub fn style(&self) -> TierStyle {
        match self {
            RiskTier::VeryHigh => TierStyle {
                label: "Very High Risk",
                color: "red",
                icon: "🚨",
                classes: TierClasses {
                    container: "bg-red-50 border-red-200",
                    text: "text-red-700",
                    badge: "bg-red-600 text-white",
                    bar: "bg-red-600",
                },
            },
            RiskTier::High => TierStyle {
                label: "High Risk",
                color: "orange",
                icon: "⚠️",
                classes: TierClasses {
                    container: "bg-orange-50 border-orange-200",
                    text: "text-orange-700",
                    badge: "bg-orange-500 text-white",
                    bar: "bg-orange-500",
                },
            },
            RiskTier::Moderate => TierStyle {
                label: "Moderate Risk",
                color: "yellow",
                icon: "⚡",
                classes: TierClasses {
                    container: "bg-yellow-50 border-yellow-200",
                    text: "text-yellow-700",
                    badge: "bg-yellow-500 text-white",
                    bar: "bg-yellow-500",
                },
            },
            RiskTier::Low => TierStyle {
                label: "Low Risk",
                color: "blue",
                icon: "ℹ️",
                classes: TierClasses {
                    container: "bg-blue-50 border-blue-200",
                    text: "text-blue-700",
                    badge: "bg-blue-500 text-white",
                    bar: "bg-blue-400",
                },
            },
            RiskTier::Normal => TierStyle {
                label: "Normal Conversation",
                color: "green",
                icon: "✅",
                classes: TierClasses {
                    container: "bg-green-50 border-green-200",
                    text: "text-green-700",
                    badge: "bg-green-600 text-white",
                    bar: "bg-green-500",
                },
            },
            RiskTier::Unknown => TierStyle {
                label: "Unknown",
                color: "gray",
                icon: "❓",
                classes: TierClasses {
                    container: "bg-gray-50 border-gray-200",
                    text: "text-gray-600",
                    badge: "bg-gray-500 text-white",
                    bar: "bg-gray-400",
                },
            },
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.style().label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyVerdict {
    Pass,
    Warn,
    Alert,
}

impl std::fmt::Display for PolicyVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyVerdict::Pass => write!(f, "pass"),
            PolicyVerdict::Warn => write!(f, "warn"),
            PolicyVerdict::Alert => write!(f, "alert"),
        }
    }
}
