//! Suggestion generation — rule-based improvement recommendations.
//!
//! Each rule is independent and fires at most once, in fixed order. Titles
//! and priorities are fixed per rule; only the measured values are
//! interpolated into descriptions.

use crate::analysis::patterns::quantified_re;
use crate::analysis::report::{Priority, Suggestion};

/// Skill count below which the skills rule fires.
const MIN_SKILLS: usize = 5;
/// Action-verb hits below which the verb rule fires.
const MIN_VERB_HITS: usize = 5;
/// Healthy resume word-count band.
const MIN_WORDS: usize = 150;
const MAX_WORDS: usize = 800;
/// ATS score from which the positive-reinforcement suggestion applies.
const REINFORCEMENT_SCORE: u32 = 80;

/// Thresholds the rules test against, extracted upstream.
#[derive(Debug, Clone)]
pub struct SuggestionSignals<'a> {
    pub has_name: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub skill_count: usize,
    pub education_count: usize,
    pub experience_resolved: bool,
    pub verb_hits: usize,
    pub ats_score: u32,
    pub text: &'a str,
}

pub fn generate_suggestions(signals: &SuggestionSignals) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if !signals.has_email {
        push(
            &mut out,
            "Add an email address",
            "No email address was found. Recruiters and ATS software expect one near the top of the resume.".to_string(),
            Priority::High,
        );
    }
    if !signals.has_phone {
        push(
            &mut out,
            "Add a phone number",
            "No phone number was found. Include one in international format so it parses reliably.".to_string(),
            Priority::Medium,
        );
    }
    if !signals.has_name {
        push(
            &mut out,
            "Make your name prominent",
            "No candidate name was detected. Put your full name on its own line at the very top.".to_string(),
            Priority::Medium,
        );
    }
    if signals.skill_count < MIN_SKILLS {
        push(
            &mut out,
            "List more relevant skills",
            format!(
                "Only {} recognized skill(s) were detected. Add a dedicated skills section with the tools and technologies you use.",
                signals.skill_count
            ),
            Priority::High,
        );
    }
    if signals.education_count == 0 {
        push(
            &mut out,
            "Add an education section",
            "No education entries were found. List your degree, institution, and graduation year.".to_string(),
            Priority::Medium,
        );
    }
    if !signals.experience_resolved {
        push(
            &mut out,
            "Clarify your experience",
            "Years of experience could not be determined. State it explicitly (e.g. \"5+ years\") or include dated positions.".to_string(),
            Priority::Medium,
        );
    }
    if signals.verb_hits < MIN_VERB_HITS {
        push(
            &mut out,
            "Use stronger action verbs",
            format!(
                "Only {} strong action verb(s) were found. Start bullet points with verbs like \"led\", \"built\", or \"improved\".",
                signals.verb_hits
            ),
            Priority::Medium,
        );
    }
    if !quantified_re().is_match(signals.text) {
        push(
            &mut out,
            "Quantify your achievements",
            "No quantified results were found. Add numbers: percentages improved, dollars saved, users served.".to_string(),
            Priority::High,
        );
    }

    let words = signals.text.split_whitespace().count();
    if words < MIN_WORDS {
        push(
            &mut out,
            "Expand your resume",
            format!(
                "The resume has only {words} words. Aim for {MIN_WORDS}-{MAX_WORDS} words of substantive content."
            ),
            Priority::Medium,
        );
    } else if words > MAX_WORDS {
        push(
            &mut out,
            "Tighten your resume",
            format!(
                "The resume has {words} words. Trim to under {MAX_WORDS} by cutting older or less relevant detail."
            ),
            Priority::Low,
        );
    }

    if signals.ats_score >= REINFORCEMENT_SCORE && out.len() < 2 {
        push(
            &mut out,
            "Strong ATS compatibility",
            format!(
                "This resume scores {}/100 on the ATS rubric. Keep it current and tailor skills per application.",
                signals.ats_score
            ),
            Priority::Low,
        );
    }

    out
}

fn push(out: &mut Vec<Suggestion>, title: &str, description: String, priority: Priority) {
    out.push(Suggestion {
        title: title.to_string(),
        description,
        priority,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_signals(text: &str) -> SuggestionSignals {
        SuggestionSignals {
            has_name: true,
            has_email: true,
            has_phone: true,
            skill_count: 8,
            education_count: 2,
            experience_resolved: true,
            verb_hits: 7,
            ats_score: 0,
            text,
        }
    }

    #[test]
    fn test_empty_input_fires_contact_and_length_rules() {
        let signals = SuggestionSignals {
            has_name: false,
            has_email: false,
            has_phone: false,
            skill_count: 0,
            education_count: 0,
            experience_resolved: false,
            verb_hits: 0,
            ats_score: 0,
            text: "",
        };
        let suggestions = generate_suggestions(&signals);
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().any(|s| s.title == "Add an email address"));
        assert!(suggestions.iter().any(|s| s.title == "Expand your resume"));
    }

    #[test]
    fn test_missing_email_is_high_priority() {
        let mut signals = complete_signals("text");
        signals.has_email = false;
        let s = generate_suggestions(&signals);
        let email = s.iter().find(|s| s.title == "Add an email address").unwrap();
        assert_eq!(email.priority, Priority::High);
    }

    #[test]
    fn test_skill_rule_interpolates_count() {
        let mut signals = complete_signals("text");
        signals.skill_count = 2;
        let s = generate_suggestions(&signals);
        let skills = s.iter().find(|s| s.title == "List more relevant skills").unwrap();
        assert!(skills.description.contains("Only 2"));
    }

    #[test]
    fn test_quantified_text_suppresses_quantify_rule() {
        let text_words = "word ".repeat(200);
        let text = format!("{text_words} improved latency by 40%");
        let signals = complete_signals(&text);
        let s = generate_suggestions(&signals);
        assert!(!s.iter().any(|x| x.title == "Quantify your achievements"));
    }

    #[test]
    fn test_overlong_resume_fires_tighten_rule() {
        let text = "word ".repeat(900);
        let mut signals = complete_signals(&text);
        signals.text = &text;
        let s = generate_suggestions(&signals);
        let long = s.iter().find(|x| x.title == "Tighten your resume").unwrap();
        assert_eq!(long.priority, Priority::Low);
    }

    #[test]
    fn test_reinforcement_on_high_score_with_few_findings() {
        let text = format!("{} cut costs by 30%", "word ".repeat(200));
        let mut signals = complete_signals(&text);
        signals.ats_score = 85;
        let s = generate_suggestions(&signals);
        assert!(s.iter().any(|x| x.title == "Strong ATS compatibility"));
    }

    #[test]
    fn test_no_reinforcement_below_threshold() {
        let text = format!("{} cut costs by 30%", "word ".repeat(200));
        let mut signals = complete_signals(&text);
        signals.ats_score = 79;
        let s = generate_suggestions(&signals);
        assert!(!s.iter().any(|x| x.title == "Strong ATS compatibility"));
    }

    #[test]
    fn test_each_rule_fires_at_most_once() {
        let signals = SuggestionSignals {
            has_name: false,
            has_email: false,
            has_phone: false,
            skill_count: 0,
            education_count: 0,
            experience_resolved: false,
            verb_hits: 0,
            ats_score: 0,
            text: "",
        };
        let s = generate_suggestions(&signals);
        let mut titles: Vec<&str> = s.iter().map(|x| x.title.as_str()).collect();
        let before = titles.len();
        titles.dedup();
        assert_eq!(titles.len(), before);
    }
}
