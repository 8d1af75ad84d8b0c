//! Axum route handlers for the Skill Match API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::aggregator::{
    FitBar, MissingSkillEntry, MissingSkillPoint, Recommendation, TEAM_SIZE,
};
use crate::matching::analysis::{run_analysis, AnalysisRequest, AnalysisSession, ProjectType};
use crate::matching::export::{export_csv, EXPORT_FILE_NAME};
use crate::matching::extractor::{Extraction, ExtractionSource};
use crate::matching::normalizer::SkillSet;
use crate::matching::scorer::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub project_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub project_type: ProjectType,
    pub required_skills: SkillSet,
    pub extraction_source: ExtractionSource,
    pub results: Vec<MatchResult>,
    pub recommendations: Vec<Recommendation>,
    pub fit_bars: Vec<FitBar>,
    pub missing_points: Vec<MissingSkillPoint>,
    pub missing_skills: Vec<MissingSkillEntry>,
    pub all_requirements_covered: bool,
}

impl From<&AnalysisSession> for AnalysisResponse {
    fn from(session: &AnalysisSession) -> Self {
        let ranked = &session.results;
        Self {
            session_id: session.id,
            created_at: session.created_at,
            project_type: session.project_type,
            required_skills: session.required_skills.clone(),
            extraction_source: session.extraction_source,
            results: ranked.entries().to_vec(),
            recommendations: ranked.recommendations(),
            fit_bars: ranked.fit_bars(),
            missing_points: ranked.missing_points(),
            missing_skills: ranked.missing_skill_breakdown(),
            all_requirements_covered: ranked.all_requirements_covered(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamMember {
    pub employee_id: i64,
    pub name: String,
    pub fit_pct: u32,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub session_id: Uuid,
    pub team: Vec<TeamMember>,
    pub note: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Previews the required skill set for a description without scoring.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<Extraction>, AppError> {
    require_text(&request.project_text)?;
    Ok(Json(state.extractor.extract(&request.project_text).await))
}

/// POST /api/v1/analysis
///
/// Runs a full analysis and makes it the current session. A run that halts
/// leaves the previous session in place.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    require_text(&request.project_text)?;

    let session = run_analysis(request, state.roster.as_ref(), state.extractor.as_ref()).await?;
    let session = state.sessions.replace(session).await;

    Ok(Json(AnalysisResponse::from(session.as_ref())))
}

/// GET /api/v1/analysis/current
pub async fn handle_current(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let session = current_session(&state).await?;
    Ok(Json(AnalysisResponse::from(session.as_ref())))
}

/// GET /api/v1/analysis/current/team
///
/// Top employees by fit. Coverage of the required skills is not checked.
pub async fn handle_team(State(state): State<AppState>) -> Result<Json<TeamResponse>, AppError> {
    let session = current_session(&state).await?;
    let team = session
        .results
        .suggested_team()
        .iter()
        .map(|r| TeamMember {
            employee_id: r.employee_id,
            name: r.name.clone(),
            fit_pct: r.fit_pct,
        })
        .collect();

    Ok(Json(TeamResponse {
        session_id: session.id,
        team,
        note: format!("Top {TEAM_SIZE} employees by fit; combined skill coverage is not verified."),
    }))
}

/// GET /api/v1/analysis/current/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = current_session(&state).await?;
    let body = export_csv(&session.results)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("project_text cannot be empty".to_string()));
    }
    Ok(())
}

async fn current_session(state: &AppState) -> Result<Arc<AnalysisSession>, AppError> {
    state
        .sessions
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".to_string()))
}
