//! Keyword-pattern presence detectors for textual compliance signals.
//!
//! These are presence detectors, not structured extraction: a single match
//! anywhere in the text is sufficient. Keyword sets cover English and
//! Filipino variants, matched case-insensitively on word boundaries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Consent-language indicators (Section 12 lawful-basis signal).
    static ref CONSENT_PATTERN: Regex = Regex::new(
        r"(?i)\b(consent|agree|authorize|permit|allow|approve|accept|payag|sang-ayon|pahintulot)\b"
    )
    .unwrap();

    /// Purpose-statement indicators (Section 11 transparency signal).
    static ref PURPOSE_PATTERN: Regex = Regex::new(
        r"(?i)\b(purpose|intended\s+for|used\s+for|processed\s+for|layunin|gagamitin)\b"
    )
    .unwrap();

    /// Insecurity indicators (Section 20). Table order is the reporting
    /// order: only the first matching pattern is surfaced.
    static ref INSECURITY_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\bunencrypted\b").unwrap(), "unencrypted"),
        (Regex::new(r"(?i)\bplain\s+text\b").unwrap(), "plain text"),
        (Regex::new(r"(?i)\bno\s+encryption\b").unwrap(), "no encryption"),
        (Regex::new(r"(?i)\bunsecured\b").unwrap(), "unsecured"),
        (Regex::new(r"(?i)\bno\s+password\b").unwrap(), "no password"),
        (Regex::new(r"(?i)\bno\s+security\b").unwrap(), "no security"),
    ];
}

/// Boolean signals derived once per analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSignals {
    pub has_consent_language: bool,
    pub has_purpose_language: bool,
    /// First insecurity keyword found, if any.
    pub insecurity_indicator: Option<&'static str>,
}

pub fn extract_signals(text: &str) -> TextSignals {
    TextSignals {
        has_consent_language: has_consent_language(text),
        has_purpose_language: has_purpose_language(text),
        insecurity_indicator: find_insecurity_indicator(text),
    }
}

pub fn has_consent_language(text: &str) -> bool {
    CONSENT_PATTERN.is_match(text)
}

pub fn has_purpose_language(text: &str) -> bool {
    PURPOSE_PATTERN.is_match(text)
}

/// Scan the insecurity table in order and return the first matching keyword.
pub fn find_insecurity_indicator(text: &str) -> Option<&'static str> {
    INSECURITY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
}
