use regex::Regex;
use std::sync::LazyLock;

/// Compiled sensitive-data patterns.
///
/// Each pattern is a `LazyLock<Option<Regex>>`: a pattern that fails to
/// compile degrades to "no matches" instead of panicking, so a bad
/// pattern can never take the pipeline down.
macro_rules! sensitive_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Whole-text classification rules ────────────────────────────────────────

// 12 contiguous digits, or space-grouped 4-4-4 (national ID cards are
// commonly printed grouped).
sensitive_pattern!(RE_NATIONAL_ID, r"\b\d{12}\b|\b\d{4} \d{4} \d{4}\b");

// Government-ID-style alphanumeric code: 5 letters, 4 digits, 1 letter.
sensitive_pattern!(RE_GOV_CODE, r"\b[A-Z]{5}[0-9]{4}[A-Z]\b");

// 10 digits, optionally prefixed by a 2-3 digit country code.
sensitive_pattern!(RE_PHONE, r"(?:\+?\d{2,3}[ -])?\b\d{10}\b");

// DD/MM/YYYY or ISO YYYY-MM-DD.
sensitive_pattern!(RE_DATE, r"\b\d{2}/\d{2}/\d{4}\b|\b\d{4}-\d{2}-\d{2}\b");

sensitive_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// 16 digits in groups of 4, separator optional.
sensitive_pattern!(RE_CARD, r"\b\d{4}(?:[ -]?\d{4}){3}\b");

// Standalone 4-digit code (PIN/OTP fallback).
sensitive_pattern!(RE_CODE_4, r"\b\d{4}\b");

// ── Span-extraction patterns ───────────────────────────────────────────────

// 10-12 digit run: phone numbers and numeric IDs.
sensitive_pattern!(RE_PHONE_OR_ID_SPAN, r"\b\d{10,12}\b");

// Keyword hits are reported case-insensitively at every occurrence.
sensitive_pattern!(RE_KEYWORD_SPAN, r"(?i)otp|password|pin");

pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Span patterns in evaluation order, with the name reported on each match.
pub fn span_patterns() -> [(&'static str, &'static LazyLock<Option<Regex>>); 5] {
    [
        ("email", &RE_EMAIL),
        ("card_number", &RE_CARD),
        ("phone_or_id", &RE_PHONE_OR_ID_SPAN),
        ("gov_code", &RE_GOV_CODE),
        ("keyword", &RE_KEYWORD_SPAN),
    ]
}
