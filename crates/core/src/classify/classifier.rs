use crate::classify::patterns;

/// Category assigned to a detected item. Exactly one per item,
/// first-match-wins over the fixed rule order in [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensitivityCategory {
    Email,
    CardNumber,
    NationalId,
    Phone,
    DateOfBirth,
    Otp,
    Password,
    Pin,
    GenericCode,
    Face,
    None,
}

/// Whole-text classification result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub sensitive: bool,
    pub category: SensitivityCategory,
}

impl Verdict {
    fn sensitive(category: SensitivityCategory) -> Self {
        Self {
            sensitive: true,
            category,
        }
    }

    fn benign() -> Self {
        Self {
            sensitive: false,
            category: SensitivityCategory::None,
        }
    }
}

/// One span-level pattern hit. Offsets are byte positions into the
/// original (non-normalized) input; for multibyte text they are not
/// character counts, hence the field names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub start_byte: usize,
    pub end_byte: usize,
    pub text: String,
    pub pattern: &'static str,
}

/// Collapses whitespace runs to single spaces for pattern matching.
/// The original text is what gets displayed; only matching sees this.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifies a whole text block against the ordered sensitive-data
/// rule list, returning on the first rule that matches.
///
/// The order is a deliberate determinism guarantee: digit-run IDs are
/// checked before phone numbers, dates, and keyword rules, and the
/// standalone 4-digit code is the final fallback. A 16-digit card
/// number therefore classifies as `NationalId` at the whole-text level
/// (its leading 12-digit run matches first); the card-specific verdict
/// is still reachable for separator-delimited numbers, and span
/// extraction reports the full card match either way.
pub fn classify(text: &str) -> Verdict {
    let clean = normalize(text);
    if clean.is_empty() {
        return Verdict::benign();
    }
    let lower = clean.to_lowercase();

    if patterns::is_match(&patterns::RE_NATIONAL_ID, &clean) {
        return Verdict::sensitive(SensitivityCategory::NationalId);
    }
    if patterns::is_match(&patterns::RE_GOV_CODE, &clean) {
        return Verdict::sensitive(SensitivityCategory::NationalId);
    }
    if patterns::is_match(&patterns::RE_PHONE, &clean) {
        return Verdict::sensitive(SensitivityCategory::Phone);
    }
    if patterns::is_match(&patterns::RE_DATE, &clean) {
        return Verdict::sensitive(SensitivityCategory::DateOfBirth);
    }
    if lower.contains("otp") {
        return Verdict::sensitive(SensitivityCategory::Otp);
    }
    if lower.contains("password") {
        return Verdict::sensitive(SensitivityCategory::Password);
    }
    if lower.contains("pin") {
        return Verdict::sensitive(SensitivityCategory::Pin);
    }
    if patterns::is_match(&patterns::RE_EMAIL, &clean) {
        return Verdict::sensitive(SensitivityCategory::Email);
    }
    if patterns::is_match(&patterns::RE_CARD, &clean) {
        return Verdict::sensitive(SensitivityCategory::CardNumber);
    }
    if patterns::is_match(&patterns::RE_CODE_4, &clean) {
        return Verdict::sensitive(SensitivityCategory::GenericCode);
    }

    Verdict::benign()
}

/// Extracts every span-level pattern hit from the original text.
///
/// Unlike [`classify`], this runs on the raw input so offsets line up
/// with what the caller displays. Spans from different patterns may
/// overlap; each is independently actionable. Order across patterns is
/// unspecified.
pub fn find_spans(text: &str) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return spans;
    }

    for (name, pattern) in patterns::span_patterns() {
        let Some(re) = pattern.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            spans.push(MatchSpan {
                start_byte: m.start(),
                end_byte: m.end(),
                text: m.as_str().to_string(),
                pattern: name,
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::aadhaar_contiguous("my id is 123456789012", SensitivityCategory::NationalId)]
    #[case::aadhaar_grouped("my id is 1234 5678 9012", SensitivityCategory::NationalId)]
    #[case::gov_code("ABCDE1234F", SensitivityCategory::NationalId)]
    #[case::phone("call me on 9876543210", SensitivityCategory::Phone)]
    #[case::phone_country_code("call +91 9876543210", SensitivityCategory::Phone)]
    #[case::dob_slash("born 21/03/1994", SensitivityCategory::DateOfBirth)]
    #[case::dob_iso("born 1994-03-21", SensitivityCategory::DateOfBirth)]
    #[case::otp_keyword("Your OTP is 482913, do not share", SensitivityCategory::Otp)]
    #[case::password_keyword("the Password: hunter2", SensitivityCategory::Password)]
    #[case::pin_keyword("enter your PIN now", SensitivityCategory::Pin)]
    #[case::email("reach jane.doe@example.com today", SensitivityCategory::Email)]
    #[case::card_dashed("1234-5678-9012-3456", SensitivityCategory::CardNumber)]
    #[case::four_digit_code("code 4829 expires", SensitivityCategory::GenericCode)]
    fn test_classify_sensitive(#[case] text: &str, #[case] expected: SensitivityCategory) {
        let verdict = classify(text);
        assert!(verdict.sensitive, "{text:?} should be sensitive");
        assert_eq!(verdict.category, expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   \t\n  ")]
    #[case::plain_prose("hello there, nice weather today")]
    #[case::short_digits("room 42 on floor 3")]
    fn test_classify_benign(#[case] text: &str) {
        let verdict = classify(text);
        assert!(!verdict.sensitive);
        assert_eq!(verdict.category, SensitivityCategory::None);
    }

    #[test]
    fn test_priority_national_id_beats_otp_keyword() {
        // Both rule 1 (12-digit run) and the "otp" keyword match; the
        // 12-digit rule is checked first.
        let verdict = classify("otp for id 123456789012");
        assert_eq!(verdict.category, SensitivityCategory::NationalId);
    }

    #[test]
    fn test_priority_card_overlaps_national_id() {
        // A space-grouped 16-digit card contains a 4-4-4 run, so the
        // whole-text verdict is NationalId by priority. Expected, not a bug.
        let verdict = classify("1234 5678 9012 3456");
        assert!(verdict.sensitive);
        assert_eq!(verdict.category, SensitivityCategory::NationalId);
    }

    #[test]
    fn test_whitespace_normalized_before_matching() {
        // Grouped ID split across a newline and double spaces still matches.
        let verdict = classify("id:\n1234  5678\t9012");
        assert_eq!(verdict.category, SensitivityCategory::NationalId);
    }

    #[test]
    fn test_otp_scenario_span_offsets() {
        let text = "Your OTP is 482913, do not share";
        let spans = find_spans(text);
        let otp = spans
            .iter()
            .find(|s| s.pattern == "keyword")
            .expect("keyword span");
        assert_eq!(otp.start_byte, 5);
        assert_eq!(otp.end_byte, 8);
        assert_eq!(otp.text, "OTP");
    }

    #[test]
    fn test_card_span_extracted() {
        let text = "pay with 1234 5678 9012 3456 please";
        let spans = find_spans(text);
        let card = spans
            .iter()
            .find(|s| s.pattern == "card_number")
            .expect("card span");
        assert_eq!(&text[card.start_byte..card.end_byte], "1234 5678 9012 3456");
    }

    #[test]
    fn test_email_span_extracted() {
        let text = "cc jane@example.com on this";
        let spans = find_spans(text);
        let email = spans.iter().find(|s| s.pattern == "email").expect("email");
        assert_eq!(email.text, "jane@example.com");
        assert_eq!(email.start_byte, 3);
    }

    #[test]
    fn test_keyword_spans_all_occurrences() {
        let text = "otp then another OTP";
        let keyword_count = find_spans(text)
            .iter()
            .filter(|s| s.pattern == "keyword")
            .count();
        assert_eq!(keyword_count, 2);
    }

    #[test]
    fn test_spans_empty_input() {
        assert!(find_spans("").is_empty());
    }

    #[test]
    fn test_spans_use_original_not_normalized_text() {
        // Leading whitespace shifts offsets; spans must reflect the original.
        let text = "   pin";
        let spans = find_spans(text);
        assert_eq!(spans[0].start_byte, 3);
        assert_eq!(spans[0].end_byte, 6);
    }

    #[test]
    fn test_span_offsets_are_bytes_not_chars() {
        // "é" is two bytes, so the keyword starts at byte 3 (char 2);
        // the offsets must slice the original string cleanly.
        let text = "é pin";
        let spans = find_spans(text);
        assert_eq!(spans[0].start_byte, 3);
        assert_eq!(&text[spans[0].start_byte..spans[0].end_byte], "pin");
    }
}
