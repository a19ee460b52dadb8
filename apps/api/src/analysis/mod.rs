//! The analysis core — a stateless, forward-only pipeline from raw resume
//! text to a structured [`Report`].
//!
//! Stage order is fixed: normalize → independent extractors (contact, name,
//! skills, education) → experience estimation → role matching → ATS scoring
//! → suggestions. No stage retries and no stage failure aborts the call;
//! missing signals become `None` fields in the report.

pub mod ats_score;
pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod report;
pub mod role_match;
pub mod skills;
pub mod suggest;
pub mod tables;

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::analysis::ats_score::{compute_ats_score, count_action_verbs, ScoreSignals};
use crate::analysis::name::NameResolver;
use crate::analysis::report::Report;
use crate::analysis::skills::SkillMatcher;
use crate::analysis::suggest::{generate_suggestions, SuggestionSignals};
use crate::analysis::tables::ReferenceTables;

/// The orchestrator. Holds the immutable reference tables and the two
/// startup-configured strategies; each `analyze` call is independent and
/// reentrant.
pub struct Analyzer {
    tables: Arc<ReferenceTables>,
    name_resolver: Arc<dyn NameResolver>,
    skill_matcher: Arc<dyn SkillMatcher>,
}

impl Analyzer {
    pub fn new(
        tables: Arc<ReferenceTables>,
        name_resolver: Arc<dyn NameResolver>,
        skill_matcher: Arc<dyn SkillMatcher>,
    ) -> Self {
        Self {
            tables,
            name_resolver,
            skill_matcher,
        }
    }

    /// Runs the full pipeline on already-extracted text.
    pub async fn analyze(&self, text: &str) -> Report {
        self.analyze_at(text, Utc::now().year()).await
    }

    /// Same pipeline with an injected current year, for deterministic tests.
    pub async fn analyze_at(&self, text: &str, current_year: i32) -> Report {
        let lines = normalize::clean_lines(text);

        let email = contact::extract_email(text);
        let phone = contact::extract_phone(text);
        let name = self.name_resolver.resolve(text, &lines).await;
        let skills = skills::detect_skills(text, &self.tables.skill_bank, &*self.skill_matcher);
        let education = education::extract_education(&lines, &self.tables.degree_words);

        let estimate = experience::estimate_experience(text, current_year);
        let role_match = role_match::match_roles(&skills, &self.tables.role_vectors);

        let verb_hits = count_action_verbs(text, &self.tables.action_verbs);
        let ats_score = compute_ats_score(&ScoreSignals {
            has_name: name.is_some(),
            has_email: email.is_some(),
            has_phone: phone.is_some(),
            skill_count: skills.len(),
            education_count: education.len(),
            experience_years: estimate.years,
            verb_hits,
            text,
            lines: &lines,
        });

        let suggestions = generate_suggestions(&SuggestionSignals {
            has_name: name.is_some(),
            has_email: email.is_some(),
            has_phone: phone.is_some(),
            skill_count: skills.len(),
            education_count: education.len(),
            experience_resolved: estimate.years.is_some(),
            verb_hits,
            ats_score,
            text,
        });

        Report {
            name,
            email,
            phone,
            skills,
            education,
            experience_years: estimate.years,
            earliest_year_seen: estimate.earliest_year,
            best_match: role_match.best_role,
            match_scores: role_match.scores,
            ats_score,
            suggestions,
        }
    }
}
