//! Education extraction — degree-bearing lines and their years.

use crate::analysis::patterns::year_re;
use crate::analysis::report::EducationEntry;

/// One entry per normalized line containing a degree keyword. Entries are
/// never merged or deduplicated across lines: three lines mentioning
/// "Bachelor" yield three entries, in document order.
pub fn extract_education(lines: &[String], degree_words: &[String]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    for ln in lines {
        let low = ln.to_lowercase();
        if !degree_words.iter().any(|w| low.contains(w.as_str())) {
            continue;
        }
        let years: Vec<String> = year_re()
            .find_iter(ln)
            .map(|m| m.as_str().to_string())
            .collect();
        entries.push(EducationEntry {
            text: ln.clone(),
            years: if years.is_empty() { None } else { Some(years) },
        });
    }
    entries
}
