//! Static pattern catalogs for the indicator extractor.
//!
//! Order matters everywhere in this file: intro phrases are tried
//! first-to-last and the first hit wins, and verb templates are tried
//! first-to-last per indicator. Regexes are compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that end a sentence when splitting explanation prose.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// One bullet item: a bullet glyph, at least one space, then content up to
/// the next round-glyph bullet or end of line. Hyphen and asterisk count as
/// bullets only when followed by whitespace, so hyphenated words survive.
pub static BULLET_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•●○◦▪▸‣*-]\s+([^\n•●○◦▪▸‣]+)").unwrap());

/// One numbered item: "3. content to end of line".
pub static NUMBERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\s+([^\n]+)").unwrap());

/// Phrases that introduce an enumeration of red flags. Colon-suffixed
/// variants come before their bare forms so the colon is consumed too.
const INTRO_PHRASES: &[&str] = &[
    "red flags include:",
    "red flags include",
    "warning signs include:",
    "warning signs include",
    "indicators include:",
    "indicators include",
    "signs of a scam:",
    "signs of a scam include",
    "suspicious elements include",
    "concerning elements include",
    "the following red flags",
    "we identified the following",
    "key concerns:",
    "reasons for concern:",
];

pub static INTRO_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    INTRO_PHRASES
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", regex::escape(p))).unwrap())
        .collect()
});

/// Lead-ins that announce a single finding mid-sentence. Every one that
/// matches contributes its continuation, up to the next sentence end.
const LEAD_INS: &[&str] = &[
    "i detected",
    "i found",
    "i noticed",
    "i identified",
    "this appears to be",
    "this shows signs of",
    "this message contains",
    "analysis reveals",
    "the message exhibits",
];

pub static LEAD_IN_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    LEAD_INS
        .iter()
        .map(|p| Regex::new(&format!(r"(?i)\b{}\s+([^.!?]+)", regex::escape(p))).unwrap())
        .collect()
});

/// Verbs whose object makes a good short indicator ("uses fake bank link"
/// → "fake bank link"). The capture takes the verb's next one to four words.
const TEMPLATE_VERBS: &[&str] = &[
    "contains", "presents", "includes", "with", "has", "showing", "claiming", "uses",
];

pub static VERB_TEMPLATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    TEMPLATE_VERBS
        .iter()
        .map(|v| Regex::new(&format!(r"(?i)\b{v}\s+(\w+(?:\s+\w+){{0,3}})")).unwrap())
        .collect()
});
