mod analysis;
mod config;
mod errors;
mod extract;
mod ner_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::name::{HeuristicNameResolver, NameResolver, NerNameResolver};
use crate::analysis::skills::{ExactMatcher, FuzzyMatcher, SkillMatcher};
use crate::analysis::tables::ReferenceTables;
use crate::analysis::Analyzer;
use crate::config::{Config, NameResolverKind, SkillMatcherKind};
use crate::ner_client::NerClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables: built once, immutable for the process lifetime.
    let tables = Arc::new(ReferenceTables::curated());
    info!(
        "Reference tables loaded: {} skills, {} roles, {} action verbs",
        tables.skill_bank.len(),
        tables.role_vectors.len(),
        tables.action_verbs.len()
    );

    // Name resolver: startup configuration decision, never a runtime fallback.
    let name_resolver: Arc<dyn NameResolver> = match config.name_resolver {
        NameResolverKind::Heuristic => {
            info!("Name resolver: heuristic");
            Arc::new(HeuristicNameResolver)
        }
        NameResolverKind::Ner => {
            // Config::from_env guarantees the endpoint is present here.
            let endpoint = config
                .ner_endpoint
                .clone()
                .expect("NER_ENDPOINT validated at config load");
            info!("Name resolver: ner ({endpoint})");
            Arc::new(NerNameResolver(NerClient::new(endpoint)))
        }
    };

    let skill_matcher: Arc<dyn SkillMatcher> = match config.skill_matcher {
        SkillMatcherKind::Exact => {
            info!("Skill matcher: exact");
            Arc::new(ExactMatcher)
        }
        SkillMatcherKind::Fuzzy { threshold } => {
            info!("Skill matcher: fuzzy (threshold {threshold})");
            Arc::new(FuzzyMatcher { threshold })
        }
    };

    let analyzer = Arc::new(Analyzer::new(tables, name_resolver, skill_matcher));

    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
