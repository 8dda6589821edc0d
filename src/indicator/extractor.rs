use std::collections::HashSet;

use crate::indicator::catalog::{
    BULLET_ITEM_RE, INTRO_PHRASE_RES, LEAD_IN_RES, NUMBERED_ITEM_RE, SENTENCE_TERMINATORS,
    VERB_TEMPLATE_RES,
};

/// Extract up to five short red-flag phrases from explanation prose.
///
/// Sources are tried in priority order:
/// 1. bullet items
/// 2. numbered items (always pooled with bullets; explanations mix both)
/// 3. an enumeration after an intro phrase ("red flags include: ...")
/// 4. lead-in phrases ("I detected ...")
/// 5. the first sentences of the text as a last resort
///
/// Stages 3 to 5 run only when everything before them produced nothing.
/// Every raw match is condensed to a short phrase, then the pool is
/// deduplicated, filtered of too-short entries, capped at five, and given
/// an uppercase first letter. Output order is deterministic for a given
/// input.
pub fn extract_indicators(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut raw = bullet_items(text);
    raw.extend(numbered_items(text));

    if raw.is_empty() {
        raw = intro_phrase_items(text);
    }
    if raw.is_empty() {
        raw = lead_in_items(text);
    }
    if raw.is_empty() {
        raw = leading_sentences(text);
    }

    let condensed: Vec<String> = raw.iter().map(|r| condense(r)).collect();
    finalize(condensed)
}

/// Collect bullet-glyph items longer than 5 characters.
fn bullet_items(text: &str) -> Vec<String> {
    BULLET_ITEM_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|item| item.chars().count() > 5)
        .collect()
}

/// Collect "1. ..." items longer than 5 characters.
fn numbered_items(text: &str) -> Vec<String> {
    NUMBERED_ITEM_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|item| item.chars().count() > 5)
        .collect()
}

/// Sentences following the first intro phrase that occurs in the text.
/// Catalog order decides which phrase wins, not text position.
fn intro_phrase_items(text: &str) -> Vec<String> {
    for re in INTRO_PHRASE_RES.iter() {
        if let Some(m) = re.find(text) {
            return text[m.end()..]
                .split(SENTENCE_TERMINATORS)
                .map(str::trim)
                .filter(|s| s.chars().count() > 5)
                .take(5)
                .map(str::to_string)
                .collect();
        }
    }
    Vec::new()
}

/// Continuations of every lead-in phrase that matches ("I detected <...>").
fn lead_in_items(text: &str) -> Vec<String> {
    LEAD_IN_RES
        .iter()
        .filter_map(|re| re.captures(text))
        .map(|caps| caps[1].trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// First three sentences longer than 5 characters.
fn leading_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| s.chars().count() > 5)
        .take(3)
        .map(str::to_string)
        .collect()
}

/// Condense a raw match into a short display phrase.
///
/// The verb templates are tried in catalog order; the first one whose
/// capture is longer than 5 characters wins. Otherwise the first four
/// tokens are kept, cut at the first punctuation mark, and stripped of
/// surrounding non-word characters.
fn condense(raw: &str) -> String {
    let trimmed = raw.trim();

    for re in VERB_TEMPLATE_RES.iter() {
        if let Some(caps) = re.captures(trimmed) {
            let captured = caps[1].trim();
            if captured.chars().count() > 5 {
                return captured.to_string();
            }
        }
    }

    let head: String = trimmed
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ");
    let head = match head.find(['.', '!', '?', ',', ';', ':']) {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };
    head.trim_matches(|c: char| !c.is_alphanumeric() && c != '_')
        .to_string()
}

/// Deduplicate (first occurrence wins), drop entries of 3 characters or
/// fewer, cap at five, and uppercase the first letter of each survivor.
fn finalize(indicators: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<String> = Vec::new();
    for indicator in indicators {
        if seen.insert(indicator.clone()) {
            unique.push(indicator);
        }
    }

    unique
        .into_iter()
        .filter(|i| i.chars().count() > 3)
        .take(5)
        .map(|i| capitalize_first(&i))
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list() {
        let text = "• Uses fake bank link\n• Claims urgent action needed\n• Has spelling dọng errors";
        assert_eq!(
            extract_indicators(text),
            vec![
                "Fake bank link",
                "Claims urgent action needed",
                "Spelling dọng errors"
            ]
        );
    }

    #[test]
    fn test_numbered_list() {
        let text = "1. Suspicious sender address\n2. Too-good-to-be-true offer";
        assert_eq!(
            extract_indicators(text),
            vec!["Suspicious sender address", "Too-good-to-be-true offer"]
        );
    }

    #[test]
    fn test_bullets_and_numbers_pool() {
        let text = "• Uses fake bank link\n1. Suspicious sender address";
        assert_eq!(
            extract_indicators(text),
            vec!["Fake bank link", "Suspicious sender address"]
        );
    }

    #[test]
    fn test_list_suppresses_intro_phrase() {
        let text = "Red flags include: something vague here. • Actual bullet item";
        assert_eq!(extract_indicators(text), vec!["Actual bullet item"]);
    }

    #[test]
    fn test_intro_phrase() {
        let text = "The message is dangerous. Red flags include: fake urgency tactics. \
                    Requests for gift cards. Unverified sender domain.";
        assert_eq!(
            extract_indicators(text),
            vec![
                "Fake urgency tactics",
                "Requests for gift cards",
                "Unverified sender domain"
            ]
        );
    }

    #[test]
    fn test_lead_in() {
        let text = "After reviewing everything carefully, I detected multiple impersonation attempts in this thread";
        assert_eq!(
            extract_indicators(text),
            vec!["Multiple impersonation attempts in"]
        );
    }

    #[test]
    fn test_every_matching_lead_in_contributes() {
        // No early stop: each lead-in phrase that matches adds one indicator.
        let text = "I detected fake invoice links. Analysis reveals urgent pressure tactics.";
        assert_eq!(
            extract_indicators(text),
            vec!["Fake invoice links", "Urgent pressure tactics"]
        );
    }

    #[test]
    fn test_intro_phrase_catalog_order_wins() {
        // "red flags include:" sits earlier in the catalog, so it wins even
        // though "indicators include:" appears first in the text.
        let text =
            "Indicators include: odd sender formatting. Red flags include: pressure tactics used.";
        assert_eq!(extract_indicators(text), vec!["Pressure tactics used"]);
    }

    #[test]
    fn test_plain_sentences_fallback() {
        let text = "This looks legitimate overall. Nothing stands out. \
                    The tone is consistent with prior messages. No action needed.";
        assert_eq!(
            extract_indicators(text),
            vec![
                "This looks legitimate overall",
                "Nothing stands out",
                "Prior messages"
            ]
        );
    }

    #[test]
    fn test_verb_template_catalog_order() {
        // "contains" outranks "includes" even though "includes" comes first
        // in the text.
        let text = "• It includes odd links and contains malware payload";
        assert_eq!(extract_indicators(text), vec!["Malware payload"]);
    }

    #[test]
    fn test_fallback_normalizes_whitespace() {
        let text = "1. Urgent    wire  transfer now please";
        assert_eq!(extract_indicators(text), vec!["Urgent wire transfer now"]);
    }

    #[test]
    fn test_dedup_keeps_first() {
        let text = "• fake payment portal\n• fake payment portal\n• New sender account";
        assert_eq!(
            extract_indicators(text),
            vec!["Fake payment portal", "New sender account"]
        );
    }

    #[test]
    fn test_caps_at_five() {
        let text = "• Reported sender number\n• Shortened tracking url\n• Payment demand upfront\n\
                    • Mismatched grammar tone\n• Unknown courier name\n• Odd delivery window\n\
                    • Missing order number";
        let indicators = extract_indicators(text);
        assert_eq!(indicators.len(), 5);
        assert_eq!(indicators[0], "Reported sender number");
        assert_eq!(indicators[4], "Unknown courier name");
    }

    #[test]
    fn test_drops_condensed_short_entries() {
        let text = "• win $$\n• Crypto wallet drain";
        assert_eq!(extract_indicators(text), vec!["Crypto wallet drain"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_indicators("").is_empty());
        assert!(extract_indicators("   \n  ").is_empty());
    }

    #[test]
    fn test_capitalizes_unicode() {
        let text = "• ọmọ verification scam";
        assert_eq!(extract_indicators(text), vec!["Ọmọ verification scam"]);
    }

    #[test]
    fn test_repeat_runs_identical() {
        let text = "• Uses fake bank link\n1. Suspicious sender address";
        assert_eq!(extract_indicators(text), extract_indicators(text));
    }
}
