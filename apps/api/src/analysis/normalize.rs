//! Text normalization — the first pipeline stage.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

/// Splits raw text into non-empty lines with internal whitespace runs
/// collapsed to a single space and ends trimmed. Order is preserved.
/// Empty input yields an empty vector; there are no error conditions.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|ln| whitespace_run().replace_all(ln, " ").trim().to_string())
        .filter(|ln| !ln.is_empty())
        .collect()
}
