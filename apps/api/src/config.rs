use std::env::VarError;

use anyhow::{bail, Context, Result};

use crate::analysis::skills::DEFAULT_FUZZY_THRESHOLD;

/// Which name-detection backend to run. Resolved once at startup; never a
/// per-call fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameResolverKind {
    Heuristic,
    Ner,
}

/// Which skill-matching strategy to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillMatcherKind {
    Exact,
    Fuzzy { threshold: f64 },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_mb: usize,
    pub name_resolver: NameResolverKind,
    /// Required when `name_resolver` is `Ner`.
    pub ner_endpoint: Option<String>,
    pub skill_matcher: SkillMatcherKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let name_resolver = name_resolver_from(std::env::var("NAME_RESOLVER"))?;

        let ner_endpoint = std::env::var("NER_ENDPOINT").ok();
        // A misconfigured recognizer is a startup error, not a silent
        // fallback to the heuristic.
        if name_resolver == NameResolverKind::Ner && ner_endpoint.is_none() {
            bail!("NAME_RESOLVER=ner requires NER_ENDPOINT to be set");
        }

        let skill_matcher = match std::env::var("SKILL_MATCHER").as_deref() {
            Ok("fuzzy") => {
                let threshold = match std::env::var("FUZZY_THRESHOLD") {
                    Ok(v) => v
                        .parse::<f64>()
                        .context("FUZZY_THRESHOLD must be a number in (0, 1]")?,
                    Err(_) => DEFAULT_FUZZY_THRESHOLD,
                };
                if !(0.0..=1.0).contains(&threshold) || threshold == 0.0 {
                    bail!("FUZZY_THRESHOLD must be in (0, 1], got {threshold}");
                }
                SkillMatcherKind::Fuzzy { threshold }
            }
            Ok("exact") | Err(VarError::NotPresent) => SkillMatcherKind::Exact,
            Ok(other) => bail!("SKILL_MATCHER must be 'exact' or 'fuzzy', got '{other}'"),
            Err(VarError::NotUnicode(_)) => bail!("SKILL_MATCHER is not valid unicode"),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_mb: std::env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a positive integer")?,
            name_resolver,
            ner_endpoint,
            skill_matcher,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

/// Unset defaults to the heuristic; a set-but-unusable value (unknown name,
/// non-unicode bytes) is a startup error, never a silent default.
fn name_resolver_from(raw: std::result::Result<String, VarError>) -> Result<NameResolverKind> {
    match raw.as_deref() {
        Ok("heuristic") | Err(VarError::NotPresent) => Ok(NameResolverKind::Heuristic),
        Ok("ner") => Ok(NameResolverKind::Ner),
        Ok(other) => bail!("NAME_RESOLVER must be 'heuristic' or 'ner', got '{other}'"),
        Err(VarError::NotUnicode(_)) => bail!("NAME_RESOLVER is not valid unicode"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_name_resolver_unset_defaults_to_heuristic() {
        let kind = name_resolver_from(Err(VarError::NotPresent)).unwrap();
        assert_eq!(kind, NameResolverKind::Heuristic);
    }

    #[test]
    fn test_name_resolver_explicit_values() {
        let heuristic = name_resolver_from(Ok("heuristic".to_string())).unwrap();
        assert_eq!(heuristic, NameResolverKind::Heuristic);
        let ner = name_resolver_from(Ok("ner".to_string())).unwrap();
        assert_eq!(ner, NameResolverKind::Ner);
    }

    #[test]
    fn test_name_resolver_unknown_value_is_error() {
        assert!(name_resolver_from(Ok("spacy".to_string())).is_err());
    }

    #[test]
    fn test_name_resolver_non_unicode_is_error_not_default() {
        let raw = Err(VarError::NotUnicode(OsString::from("ner")));
        assert!(name_resolver_from(raw).is_err());
    }
}
