//! Report models — the structured output of a single analysis pass.
//!
//! Absent signals are `Option::None` everywhere and serialize as JSON `null`.
//! That is the one sentinel for "not determined" across the whole report;
//! no field ever mixes `null` with empty strings or zeros for the same meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Priority attached to a suggestion. Fixed per rule, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One improvement recommendation emitted by the suggestion rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// A degree-bearing line and the 4-digit years found on it, in order of
/// appearance. `years` is `None` when the line mentions a degree but no year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub text: String,
    pub years: Option<Vec<String>>,
}

/// Full analysis report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical skill names in vocabulary order, deduplicated, at most 30.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience_years: Option<u32>,
    pub earliest_year_seen: Option<i32>,
    /// Best-fit role, or "no match" when the role table is empty.
    pub best_match: String,
    /// Per-role overlap scores, each in 0–100.
    pub match_scores: BTreeMap<String, u32>,
    /// Weighted rubric score in 0–100.
    pub ats_score: u32,
    pub suggestions: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let report = Report {
            name: None,
            email: None,
            phone: None,
            skills: vec![],
            education: vec![],
            experience_years: None,
            earliest_year_seen: None,
            best_match: "no match".to_string(),
            match_scores: BTreeMap::new(),
            ats_score: 0,
            suggestions: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["name"].is_null());
        assert!(json["experience_years"].is_null());
        assert!(json["skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_education_entry_roundtrip() {
        let json = r#"{"text": "B.Sc Computer Science, 2018", "years": ["2018"]}"#;
        let entry: EducationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.years.as_deref(), Some(&["2018".to_string()][..]));
    }
}
