use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::models::{PolicyVerdict, RiskTier};

/// Root configuration structure, deserialized from `.redflagr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Tier policy rules.
    pub policy: PolicyConfig,
}

/// Defines how risk tiers are acted on.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Verdict applied to any tier not explicitly listed in `tiers`.
    /// Defaults to `warn`.
    #[serde(default = "default_policy_action")]
    pub default: PolicyAction,
    /// Per-tier overrides keyed by tier name (e.g. `"very_high"`, `"low"`).
    #[serde(default)]
    pub tiers: HashMap<String, PolicyAction>,
}

fn default_policy_action() -> PolicyAction {
    PolicyAction::Warn
}

/// The action to take when an assessment lands in a given tier.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    /// Assessment is harmless; no action needed.
    Pass,
    /// Assessment warrants review but does not fail the run.
    Warn,
    /// Assessment violates policy; the CLI exits with code 1.
    Alert,
}

impl PolicyAction {
    /// Convert to the corresponding [`PolicyVerdict`].
    pub fn to_verdict(&self) -> PolicyVerdict {
        match self {
            PolicyAction::Pass => PolicyVerdict::Pass,
            PolicyAction::Warn => PolicyVerdict::Warn,
            PolicyAction::Alert => PolicyVerdict::Alert,
        }
    }
}

impl Default for Config {
    /// Built-in default policy used when no config file is found.
    ///
    /// The two high tiers alert, moderate and unknown assessments warn, and
    /// low-risk or normal conversations pass.
    fn default() -> Self {
        let mut tiers = HashMap::new();
        tiers.insert("very_high".to_string(), PolicyAction::Alert);
        tiers.insert("high".to_string(), PolicyAction::Alert);
        tiers.insert("moderate".to_string(), PolicyAction::Warn);
        tiers.insert("low".to_string(), PolicyAction::Pass);
        tiers.insert("normal".to_string(), PolicyAction::Pass);
        tiers.insert("unknown".to_string(), PolicyAction::Warn);

        Config {
            policy: PolicyConfig {
                default: PolicyAction::Warn,
                tiers,
            },
        }
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_path>/.redflagr/config.toml`
/// 3. `~/.config/redflagr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = base_path.join(".redflagr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("redflagr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

/// Determine the policy verdict for a risk tier.
pub fn apply_policy(config: &Config, tier: &RiskTier) -> PolicyVerdict {
    match config.policy.tiers.get(tier_key(tier)) {
        Some(action) => action.to_verdict(),
        None => config.policy.default.to_verdict(),
    }
}

/// Config-file key for a tier.
fn tier_key(tier: &RiskTier) -> &'static str {
    match tier {
        RiskTier::VeryHigh => "very_high",
        RiskTier::High => "high",
        RiskTier::Moderate => "moderate",
        RiskTier::Low => "low",
        RiskTier::Normal => "normal",
        RiskTier::Unknown => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_policy() {
        let cfg = Config::default();
        assert_eq!(apply_policy(&cfg, &RiskTier::VeryHigh), PolicyVerdict::Alert);
        assert_eq!(apply_policy(&cfg, &RiskTier::High), PolicyVerdict::Alert);
        assert_eq!(apply_policy(&cfg, &RiskTier::Moderate), PolicyVerdict::Warn);
        assert_eq!(apply_policy(&cfg, &RiskTier::Low), PolicyVerdict::Pass);
        assert_eq!(apply_policy(&cfg, &RiskTier::Normal), PolicyVerdict::Pass);
        assert_eq!(apply_policy(&cfg, &RiskTier::Unknown), PolicyVerdict::Warn);
    }

    #[test]
    fn test_custom_policy() {
        let cfg: Config = toml::from_str(
            r#"
            [policy]
            default = "pass"

            [policy.tiers]
            moderate = "alert"
            "#,
        )
        .unwrap();

        assert_eq!(apply_policy(&cfg, &RiskTier::Moderate), PolicyVerdict::Alert);
        // Unlisted tiers fall back to the default action.
        assert_eq!(apply_policy(&cfg, &RiskTier::VeryHigh), PolicyVerdict::Pass);
    }

    #[test]
    fn test_default_action_when_omitted() {
        let cfg: Config = toml::from_str(
            r#"
            [policy.tiers]
            very_high = "alert"
            "#,
        )
        .unwrap();

        assert_eq!(apply_policy(&cfg, &RiskTier::VeryHigh), PolicyVerdict::Alert);
        assert_eq!(apply_policy(&cfg, &RiskTier::Low), PolicyVerdict::Warn);
    }

    #[test]
    fn test_load_config_override() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[policy]").unwrap();
        writeln!(f, "default = \"alert\"").unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(apply_policy(&cfg, &RiskTier::Normal), PolicyVerdict::Alert);
    }

    #[test]
    fn test_load_config_bad_override_fails() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "not valid toml [[").unwrap();

        assert!(load_config(Path::new("."), Some(f.path())).is_err());
    }
}
