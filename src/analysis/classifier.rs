//! Keyword heuristics shared by both analysis paths.
//!
//! The safety classifier is a case-insensitive substring scan with a fixed
//! rule order. The order is load-bearing: the Unsafe rule runs first so that
//! "not safe" is never claimed by the Safe rule. Matching is substring
//! containment rather than word-boundary matching, so "safety" satisfies the
//! "safe" rule and "completely safe, not a dangerous food" classifies as
//! Unsafe because "dangerous" appears. Both quirks are kept deliberately;
//! tightening the matching would silently change what users are told.

use crate::analysis::models::SafetyLevel;
use regex::Regex;
use std::sync::OnceLock;

const UNSAFE_KEYWORDS: [&str; 4] = ["unsafe", "not safe", "toxic", "dangerous"];
const CAUTION_KEYWORDS: [&str; 3] = ["caution", "moderate", "careful"];

/// Classify a candidate text into a safety level.
///
/// Falls back to `Caution` when no keyword set matches; ambiguity resolves to
/// the conservative middle choice.
pub fn classify_safety(text: &str) -> SafetyLevel {
    let lower = text.to_lowercase();

    if UNSAFE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        SafetyLevel::Unsafe
    } else if CAUTION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        SafetyLevel::Caution
    } else if lower.contains("safe") {
        // "unsafe" and "not safe" were already claimed by the first rule.
        SafetyLevel::Safe
    } else {
        SafetyLevel::Caution
    }
}

fn bullet_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-•*]\s*").unwrap())
}

/// Strip a leading bullet marker (`-`, `•`, or `*`) and surrounding whitespace.
pub fn strip_bullet(line: &str) -> String {
    bullet_marker().replace(line.trim(), "").trim().to_string()
}

/// Mine safe alternatives out of an unstructured response.
///
/// Once a line mentioning "alternative" or "instead" is seen, every later
/// non-empty line is collected (bullet markers stripped). Collecting mode
/// never switches off; it runs to the end of the text. Trigger lines
/// themselves are skipped, including ones seen while already collecting.
pub fn extract_alternatives(text: &str) -> Vec<String> {
    let mut alternatives = Vec::new();
    let mut collecting = false;

    for line in text.lines() {
        let lower = line.to_lowercase();
        if lower.contains("alternative") || lower.contains("instead") {
            collecting = true;
            continue;
        }
        if collecting && !line.trim().is_empty() {
            let alt = strip_bullet(line);
            if !alt.is_empty() {
                alternatives.push(alt);
            }
        }
    }

    alternatives
}
