//! Role matching — overlap between detected skills and per-role skill vectors.

use std::collections::{BTreeMap, HashSet};

use crate::analysis::tables::RoleVector;

/// Sentinel best-match value for an empty role table.
pub const NO_MATCH: &str = "no match";

#[derive(Debug, Clone)]
pub struct RoleMatch {
    pub best_role: String,
    pub scores: BTreeMap<String, u32>,
}

/// Per role: `round(100 * |intersection| / |required|)` with a minimum
/// denominator of 1. Best role is the first maximal entry in table order —
/// an accepted, documented tie-break.
pub fn match_roles(skills: &[String], role_vectors: &[RoleVector]) -> RoleMatch {
    let detected: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut scores = BTreeMap::new();
    let mut best_role = NO_MATCH.to_string();
    let mut best_score: Option<u32> = None;

    for rv in role_vectors {
        let overlap = rv
            .required
            .iter()
            .filter(|s| detected.contains(&s.to_lowercase()))
            .count();
        let denom = rv.required.len().max(1);
        let score = ((overlap as f64 / denom as f64) * 100.0).round() as u32;

        // Strictly-greater keeps the first maximal role in table order.
        if best_score.map_or(true, |b| score > b) {
            best_score = Some(score);
            best_role = rv.role.clone();
        }
        scores.insert(rv.role.clone(), score);
    }

    RoleMatch { best_role, scores }
}
