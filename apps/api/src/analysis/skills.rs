//! Skill detection — matches free text against the curated skill vocabulary.
//!
//! The matching strategy is injectable so tests can pin exact-substring
//! behavior independent of similarity-scoring nuance. Exact matching is the
//! authoritative default; fuzzy matching is opt-in via `SKILL_MATCHER=fuzzy`.

use strsim::jaro_winkler;

/// Cap on detected skills, matching the report contract.
pub const MAX_SKILLS: usize = 30;

/// Default similarity threshold for the fuzzy strategy.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Strategy seam for vocabulary matching. `haystack` is the lowercased raw
/// text; `tokens` are its lowercased, punctuation-trimmed words.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, haystack: &str, tokens: &[String], skill: &str) -> bool;
}

/// Case-insensitive exact substring matching. Deterministic; a skill must be
/// a genuine substring of the text, never a regex edge case.
pub struct ExactMatcher;

impl SkillMatcher for ExactMatcher {
    fn matches(&self, haystack: &str, _tokens: &[String], skill: &str) -> bool {
        haystack.contains(skill)
    }
}

/// Exact substring short-circuit, then token-level Jaro-Winkler similarity.
/// Tolerates minor spelling/format variation ("nodejs" for "node.js").
pub struct FuzzyMatcher {
    pub threshold: f64,
}

impl SkillMatcher for FuzzyMatcher {
    fn matches(&self, haystack: &str, tokens: &[String], skill: &str) -> bool {
        if haystack.contains(skill) {
            return true;
        }
        tokens.iter().any(|t| jaro_winkler(t, skill) >= self.threshold)
    }
}

/// Runs the vocabulary over the text. Output preserves vocabulary iteration
/// order, is deduplicated, and is capped at [`MAX_SKILLS`].
pub fn detect_skills(text: &str, skill_bank: &[String], matcher: &dyn SkillMatcher) -> Vec<String> {
    let haystack = text.to_lowercase();
    let tokens: Vec<String> = haystack
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let mut seen = std::collections::HashSet::new();
    let mut found = Vec::new();
    for skill in skill_bank {
        if found.len() >= MAX_SKILLS {
            break;
        }
        if matcher.matches(&haystack, &tokens, skill) && seen.insert(skill.clone()) {
            found.push(skill.clone());
        }
    }
    found
}
