//! ATS scoring — deterministic weighted rubric over six signal buckets.

/// Character band for the formatting-length signal.
const LENGTH_BAND: std::ops::RangeInclusive<usize> = 500..=3000;

/// Characters that open a bulleted line.
const BULLET_MARKERS: &[char] = &['•', '●', '▪', '-', '*', '–'];

/// Everything the rubric looks at, extracted upstream.
#[derive(Debug, Clone)]
pub struct ScoreSignals<'a> {
    pub has_name: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub skill_count: usize,
    pub education_count: usize,
    pub experience_years: Option<u32>,
    pub verb_hits: usize,
    pub text: &'a str,
    pub lines: &'a [String],
}

/// Sums six buckets and clamps to [0, 100]:
/// contact 15, skills 25, education 15, experience 15, action verbs 15,
/// formatting 15.
pub fn compute_ats_score(signals: &ScoreSignals) -> u32 {
    let mut score = 0u32;

    // 1. Contact completeness — 5 points per field present.
    for present in [signals.has_name, signals.has_email, signals.has_phone] {
        if present {
            score += 5;
        }
    }

    // 2. Skill count, tiered.
    score += match signals.skill_count {
        n if n >= 10 => 25,
        n if n >= 6 => 20,
        n if n >= 3 => 15,
        n if n >= 1 => 10,
        _ => 0,
    };

    // 3. Education entries, tiered.
    score += match signals.education_count {
        n if n >= 2 => 15,
        1 => 10,
        _ => 0,
    };

    // 4. Experience years — only scored when a value was determined.
    if let Some(years) = signals.experience_years {
        score += match years {
            y if y >= 5 => 15,
            y if y >= 2 => 12,
            y if y >= 1 => 8,
            _ => 0,
        };
    }

    // 5. Action-verb usage, tiered on total occurrences.
    score += match signals.verb_hits {
        n if n >= 10 => 15,
        n if n >= 6 => 12,
        n if n >= 3 => 8,
        n if n >= 1 => 5,
        _ => 0,
    };

    // 6. Formatting signals.
    if has_bullet_markers(signals.lines) {
        score += 5;
    }
    if count_header_lines(signals.lines) >= 2 {
        score += 5;
    }
    if LENGTH_BAND.contains(&signals.text.chars().count()) {
        score += 5;
    }

    score.min(100)
}

/// Counts whole-token occurrences of the curated verb list, case-insensitive.
/// Every occurrence counts, not every distinct verb.
pub fn count_action_verbs(text: &str, verbs: &[String]) -> usize {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| verbs.iter().any(|v| v == t))
        .count()
}

fn has_bullet_markers(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|ln| ln.chars().next().is_some_and(|c| BULLET_MARKERS.contains(&c)))
}

/// A header-like line: up to five words, each starting with an uppercase
/// letter, no digits. "EXPERIENCE" and "Work Experience" both qualify.
fn count_header_lines(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|ln| {
            let tokens: Vec<&str> = ln.split_whitespace().collect();
            !tokens.is_empty()
                && tokens.len() <= 5
                && tokens.iter().all(|t| {
                    let t = t.trim_end_matches(':');
                    t.chars().next().is_some_and(|c| c.is_ascii_uppercase())
                        && t.chars().all(|c| c.is_alphabetic() || c == '&')
                })
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::ReferenceTables;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn base_signals<'a>(text: &'a str, ls: &'a [String]) -> ScoreSignals<'a> {
        ScoreSignals {
            has_name: false,
            has_email: false,
            has_phone: false,
            skill_count: 0,
            education_count: 0,
            experience_years: None,
            verb_hits: 0,
            text,
            lines: ls,
        }
    }

    #[test]
    fn test_empty_signals_score_zero() {
        let ls = lines(&[]);
        assert_eq!(compute_ats_score(&base_signals("", &ls)), 0);
    }

    #[test]
    fn test_contact_bucket_is_5_per_field() {
        let ls = lines(&[]);
        let mut s = base_signals("", &ls);
        s.has_name = true;
        assert_eq!(compute_ats_score(&s), 5);
        s.has_email = true;
        s.has_phone = true;
        assert_eq!(compute_ats_score(&s), 15);
    }

    #[test]
    fn test_skill_tiers() {
        let ls = lines(&[]);
        for (count, expected) in [(0, 0), (1, 10), (3, 15), (6, 20), (10, 25), (25, 25)] {
            let mut s = base_signals("", &ls);
            s.skill_count = count;
            assert_eq!(compute_ats_score(&s), expected, "count {count}");
        }
    }

    #[test]
    fn test_experience_absent_scores_nothing() {
        let ls = lines(&[]);
        let mut s = base_signals("", &ls);
        s.experience_years = None;
        assert_eq!(compute_ats_score(&s), 0);
        s.experience_years = Some(0);
        assert_eq!(compute_ats_score(&s), 0);
        s.experience_years = Some(5);
        assert_eq!(compute_ats_score(&s), 15);
    }

    #[test]
    fn test_formatting_bullets_headers_and_length() {
        let text = "x".repeat(600);
        let ls = lines(&["EXPERIENCE", "EDUCATION", "• built things"]);
        let s = base_signals(&text, &ls);
        assert_eq!(compute_ats_score(&s), 15);
    }

    #[test]
    fn test_single_header_not_enough() {
        let ls = lines(&["EXPERIENCE", "worked at acme for years"]);
        let s = base_signals("short", &ls);
        assert_eq!(compute_ats_score(&s), 0);
    }

    #[test]
    fn test_score_clamped_at_100() {
        let text = "y".repeat(1200);
        let ls = lines(&["EXPERIENCE", "EDUCATION", "• item"]);
        let s = ScoreSignals {
            has_name: true,
            has_email: true,
            has_phone: true,
            skill_count: 12,
            education_count: 2,
            experience_years: Some(8),
            verb_hits: 11,
            text: &text,
            lines: &ls,
        };
        let score = compute_ats_score(&s);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_count_action_verbs_counts_occurrences() {
        let tables = ReferenceTables::curated();
        let n = count_action_verbs("Led a team. Built tools. Led migrations.", &tables.action_verbs);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_count_action_verbs_respects_token_boundaries() {
        let tables = ReferenceTables::curated();
        // "filed" and "misled" must not count as "led".
        let n = count_action_verbs("filed reports, misled nobody", &tables.action_verbs);
        assert_eq!(n, 0);
    }
}
