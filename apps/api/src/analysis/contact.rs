//! Contact extraction — email and phone candidates from raw text.

use crate::analysis::patterns::{email_re, phone_candidate_re};

/// Returns the first email address in the text, or `None`.
pub fn extract_email(text: &str) -> Option<String> {
    email_re().find(text).map(|m| m.as_str().to_string())
}

/// Scans the raw text for plausible phone spans and returns the first one
/// that validates, formatted as `+<country> <national>`. Candidates that
/// fail validation are skipped and scanning continues.
pub fn extract_phone(text: &str) -> Option<String> {
    phone_candidate_re()
        .find_iter(text)
        .find_map(|m| format_international(m.as_str()))
}

/// Rough E.164: 7–15 digits total. International candidates (leading `+`)
/// keep their own country code; bare 10-digit nationals are assumed NANP.
/// Anything else cannot be resolved to a country and is rejected — this is
/// what filters out year ranges and other digit runs the candidate regex
/// picks up.
fn format_international(candidate: &str) -> Option<String> {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
    if !(7..=15).contains(&digits.len()) {
        return None;
    }

    if candidate.trim_start().starts_with('+') {
        // Country code is the digit run attached to the '+', up to the first
        // separator; 1–3 digits per E.164.
        let cc: String = candidate
            .trim_start()
            .trim_start_matches('+')
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if cc.is_empty() || cc.len() > 3 || cc.len() >= digits.len() {
            return None;
        }
        let national = &digits[cc.len()..];
        if national.len() < 4 {
            return None;
        }
        return Some(format!("+{cc} {national}"));
    }

    match digits.len() {
        10 => Some(format!("+1 {digits}")),
        11 if digits.starts_with('1') => Some(format!("+1 {}", &digits[1..])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_email() {
        let text = "Jane Doe\njane.doe@example.com\nbackup: other@mail.org";
        assert_eq!(extract_email(text).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_no_email_is_none() {
        assert_eq!(extract_email("no contact details here"), None);
    }

    #[test]
    fn test_international_phone_keeps_country_code() {
        let text = "Call me at +44 20 7946 0958 anytime";
        assert_eq!(extract_phone(text).as_deref(), Some("+44 2079460958"));
    }

    #[test]
    fn test_national_nanp_phone() {
        let text = "Phone: (555) 123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("+1 5551234567"));
    }

    #[test]
    fn test_eleven_digit_nanp_with_leading_one() {
        assert_eq!(
            extract_phone("1-555-123-4567").as_deref(),
            Some("+1 5551234567")
        );
    }

    #[test]
    fn test_phone_followed_by_dated_line() {
        // The employment dates on the next line must not merge into the
        // phone candidate and push it past the digit limit.
        let text = "Jane Doe\n+1 555 123 4567\n2019 - 2023 Acme Corp";
        assert_eq!(extract_phone(text).as_deref(), Some("+1 5551234567"));
    }

    #[test]
    fn test_year_range_is_not_a_phone() {
        // 8 digits, no '+', not a 10-digit national — skipped, not fatal.
        assert_eq!(extract_phone("Acme Corp 2019 - 2023"), None);
    }

    #[test]
    fn test_invalid_candidate_skipped_scan_continues() {
        let text = "ref 2019 - 2023, phone +91 98765 43210";
        assert_eq!(extract_phone(text).as_deref(), Some("+91 9876543210"));
    }

    #[test]
    fn test_too_many_digits_rejected() {
        assert_eq!(extract_phone("+1 23456789012345678"), None);
    }
}
