//! Name resolution — pluggable, trait-based candidate-name detection.
//!
//! Default: `HeuristicNameResolver` (pure-Rust, deterministic, fully testable).
//! Opt-in: `NerNameResolver` (external entity-recognition service).
//!
//! The backend is chosen once at startup via `NAME_RESOLVER`; the two
//! strategies are never combined within one call.

use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use crate::analysis::patterns::{email_re, url_re};
use crate::ner_client::NerClient;

/// How many normalized lines from the top the heuristic inspects.
const NAME_SCAN_WINDOW: usize = 8;

fn name_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "Firstname Lastname" shape: letters, hyphens, apostrophes, periods.
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z\-.' ]{2,} +[A-Za-z\-.' ]{2,}$").expect("name regex"))
}

/// The name resolver seam. Implement this to swap backends without touching
/// the orchestrator. Carried in the `Analyzer` as `Arc<dyn NameResolver>`.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Returns the candidate's name, or `None` when no strategy output is
    /// available. Never fails the analysis call.
    async fn resolve(&self, raw_text: &str, lines: &[String]) -> Option<String>;
}

/// Line-heuristic resolver: first top-of-document line that looks like
/// "Firstname Lastname" and carries no email or URL.
pub struct HeuristicNameResolver;

#[async_trait]
impl NameResolver for HeuristicNameResolver {
    async fn resolve(&self, _raw_text: &str, lines: &[String]) -> Option<String> {
        guess_name(lines)
    }
}

/// Entity-recognition resolver: first PERSON entity reported by the external
/// service, recognizer casing and spacing preserved. A transport failure
/// degrades to an absent name — the strategy choice was made at startup and
/// never switches mid-call.
pub struct NerNameResolver(pub NerClient);

#[async_trait]
impl NameResolver for NerNameResolver {
    async fn resolve(&self, raw_text: &str, _lines: &[String]) -> Option<String> {
        match self.0.first_person(raw_text).await {
            Ok(person) => person,
            Err(e) => {
                warn!("NER name resolution failed, reporting name as absent: {e}");
                None
            }
        }
    }
}

fn guess_name(lines: &[String]) -> Option<String> {
    for ln in lines.iter().take(NAME_SCAN_WINDOW) {
        let tokens = ln.split_whitespace().count();
        if !(2..=6).contains(&tokens) {
            continue;
        }
        if !name_shape_re().is_match(ln) {
            continue;
        }
        if email_re().is_match(ln) || url_re().is_match(ln) {
            continue;
        }
        return Some(ln.clone());
    }
    None
}
