use std::io::Read;
use std::path::Path;

use anyhow::Result;

use crate::models::Verdict;

/// Read one verdict file, or stdin when `path` is `-`.
/// Returns the source name used in reports alongside the parsed verdict.
pub fn load_verdict(path: &Path) -> Result<(String, Verdict)> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(("stdin".to_string(), parse_verdict(&buf)));
    }

    let content = std::fs::read_to_string(path)?;
    Ok((path.display().to_string(), parse_verdict(&content)))
}

/// Parse upstream classifier output.
///
/// JSON objects are field-extracted with a small set of accepted key
/// synonyms per field; bare numbers are stringified so a probability of
/// `80` and `"80%"` behave alike. Anything that is not a JSON object is
/// treated as a bare explanation.
pub fn parse_verdict(text: &str) -> Verdict {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
        if let Some(obj) = json.as_object() {
            return Verdict {
                status: string_field(obj, &["status", "classification", "verdict"]),
                probability: string_field(
                    obj,
                    &["probability", "scamProbability", "scam_probability", "confidence"],
                ),
                explanation: string_field(
                    obj,
                    &["explanation", "analysis", "reasoning", "details"],
                ),
            };
        }
    }

    Verdict {
        status: None,
        probability: None,
        explanation: Some(text.to_string()),
    }
}

/// First present key wins. Strings are taken as-is, numbers are
/// stringified, other value types are skipped.
fn string_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    keys: &[&str],
) -> Option<String> {
    for key in keys {
        if let Some(value) = obj.get(*key) {
            if let Some(s) = value.as_str() {
                return Some(s.to_string());
            }
            if let Some(n) = value.as_f64() {
                return Some(n.to_string());
            }
        }
    }
    None
}
