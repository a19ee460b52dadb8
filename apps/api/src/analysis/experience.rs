//! Experience estimation — explicit phrase first, earliest-year inference second.

use crate::analysis::patterns::{email_re, explicit_years_re, url_re, year_re};

/// Inferred years are only trusted when the earliest year falls in this
/// window; older minimums usually come from publication dates or noise.
const EARLIEST_YEAR_FLOOR: i32 = 1990;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEstimate {
    pub years: Option<u32>,
    pub earliest_year: Option<i32>,
}

/// Two-phase estimate. An explicit "<N>[+] years" phrase anywhere in the
/// text is authoritative; otherwise years are inferred from the earliest
/// calendar year mentioned. The year scan runs regardless so
/// `earliest_year` is reported even when the phrase wins. Emails and URLs
/// are stripped before scanning to avoid spurious 4-digit matches.
pub fn estimate_experience(text: &str, current_year: i32) -> ExperienceEstimate {
    let explicit = explicit_years_re()
        .captures(text)
        .and_then(|c| c[1].parse::<u32>().ok());

    let stripped = email_re().replace_all(text, " ");
    let stripped = url_re().replace_all(&stripped, " ");
    let minimum = year_re()
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .min();
    // The minimum itself must fall in the trusted window; a 1985 minimum is
    // not replaced by the next-oldest year.
    let earliest = minimum.filter(|y| (EARLIEST_YEAR_FLOOR..=current_year).contains(y));

    match explicit {
        Some(n) => ExperienceEstimate {
            years: Some(n),
            earliest_year: earliest,
        },
        None => match earliest {
            Some(y) => ExperienceEstimate {
                years: Some((current_year - y).max(0) as u32),
                earliest_year: Some(y),
            },
            None => ExperienceEstimate {
                years: None,
                earliest_year: None,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    #[test]
    fn test_explicit_phrase_is_authoritative() {
        let est = estimate_experience("5+ years of backend work since 2010", YEAR);
        assert_eq!(est.years, Some(5));
        assert_eq!(est.earliest_year, Some(2010));
    }

    #[test]
    fn test_explicit_phrase_without_plus() {
        let est = estimate_experience("over 12 years in industry", YEAR);
        assert_eq!(est.years, Some(12));
    }

    #[test]
    fn test_inference_from_earliest_year() {
        let est = estimate_experience("Acme Corp 2018 - 2023\nBeta Inc 2015 - 2018", YEAR);
        assert_eq!(est.earliest_year, Some(2015));
        assert_eq!(est.years, Some((YEAR - 2015) as u32));
    }

    #[test]
    fn test_no_years_and_no_phrase_both_absent() {
        let est = estimate_experience("seasoned engineer, many projects", YEAR);
        assert_eq!(est.years, None);
        assert_eq!(est.earliest_year, None);
    }

    #[test]
    fn test_pre_1990_minimum_is_untrusted() {
        let est = estimate_experience("born 1985, joined Acme 2015", YEAR);
        assert_eq!(est.years, None);
        assert_eq!(est.earliest_year, None);
    }

    #[test]
    fn test_email_digits_do_not_count_as_years() {
        let est = estimate_experience("contact: jane1990@example.com", YEAR);
        assert_eq!(est.earliest_year, None);
    }

    #[test]
    fn test_url_digits_do_not_count_as_years() {
        let est = estimate_experience("see https://example.com/2001/profile", YEAR);
        assert_eq!(est.earliest_year, None);
    }

    #[test]
    fn test_future_year_is_untrusted() {
        let est = estimate_experience("graduating 2099", YEAR);
        assert_eq!(est.years, None);
        assert_eq!(est.earliest_year, None);
    }
}
