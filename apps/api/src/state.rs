use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analyzer carries the immutable reference tables and the
/// startup-configured name/skill strategies; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub config: Config,
}
