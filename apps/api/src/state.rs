use std::sync::Arc;

use crate::db::RosterProvider;
use crate::matching::extractor::SkillExtractionService;
use crate::matching::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterProvider>,
    /// Heuristic-only or LLM-backed, chosen via SKILL_EXTRACTION_MODE.
    pub extractor: Arc<dyn SkillExtractionService>,
    pub sessions: SessionStore,
}
