mod config;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, ExtractionMode};
use crate::db::{create_pool, PgRosterProvider};
use crate::llm_client::{LlmClient, TextCompletion};
use crate::matching::extractor::{HeuristicExtractor, LlmSkillExtractor, SkillExtractionService};
use crate::matching::session::SessionStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Match API v{}", env!("CARGO_PKG_VERSION"));

    // Roster (PostgreSQL)
    let pool = create_pool(&config.roster).await?;
    let roster = Arc::new(PgRosterProvider::new(pool));

    // Skill extraction backend
    let extractor = build_extractor(&config)?;
    info!(
        "Skill extraction backend: {} (timeout {:?})",
        extractor.backend(),
        config.extraction_timeout
    );

    let state = AppState {
        roster,
        extractor,
        sessions: SessionStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // single internal user; dashboard served elsewhere

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_extractor(config: &Config) -> Result<Arc<dyn SkillExtractionService>> {
    let completion: Option<Arc<dyn TextCompletion>> = match (config.extraction_mode, &config.llm) {
        (ExtractionMode::Llm, Some(llm_config)) => {
            let client = LlmClient::new(llm_config)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        _ => None,
    };
    wire_extractor(config, completion)
}

/// Picks the extraction backend for the configured mode and hands it the
/// configured extraction timeout.
fn wire_extractor(
    config: &Config,
    completion: Option<Arc<dyn TextCompletion>>,
) -> Result<Arc<dyn SkillExtractionService>> {
    match (config.extraction_mode, completion) {
        (ExtractionMode::Llm, Some(completion)) => Ok(Arc::new(LlmSkillExtractor::new(
            completion,
            config.extraction_timeout,
        ))),
        (ExtractionMode::Llm, None) => {
            anyhow::bail!("SKILL_EXTRACTION_MODE=llm requires LLM configuration")
        }
        (ExtractionMode::Heuristic, _) => Ok(Arc::new(HeuristicExtractor)),
    }
}
