//! Compiled patterns shared across pipeline stages.
//!
//! Each regex is compiled once on first use and reused for the process
//! lifetime, matching the load-once discipline of the reference tables.

use regex::Regex;
use std::sync::OnceLock;

/// `local@domain.tld` with a 2+ letter TLD.
pub fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email regex")
    })
}

/// http(s) URLs, stopping at whitespace or a closing paren.
pub fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s)]+").expect("url regex"))
}

/// 4-digit calendar years in 1900–2099.
pub fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year regex"))
}

/// Explicit experience phrases like "5 years" or "5+ years".
pub fn explicit_years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?\b").expect("years regex"))
}

/// Plausible phone spans: an optional `+`, then digits with common same-line
/// separators. A newline ends the candidate so a dated line below a phone
/// number cannot merge into it. Deliberately loose; candidates are validated
/// afterwards.
pub fn phone_candidate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+?\d[\d \t().\-]{6,}\d").expect("phone regex"))
}

/// Quantified achievements: percentages, dollar amounts, or "N+" counts.
pub fn quantified_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+%|\$\d+|\b\d+\+").expect("quantified regex"))
}
