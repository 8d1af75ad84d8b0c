//! Analysis workflow.
//!
//! Flow: fetch roster → extract required skills → score each employee →
//!       aggregate → fresh `AnalysisSession`.
//!
//! Halts early with `NoSkillsFound` (nothing to score against) or `NoMatches`
//! (nobody overlaps). A roster failure is fatal for the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::db::RosterProvider;
use crate::matching::aggregator::{aggregate, RankedResults};
use crate::matching::extractor::{ExtractionSource, SkillExtractionService};
use crate::matching::normalizer::SkillSet;
use crate::matching::scorer::score;
use crate::models::employee::Employee;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No skills found in the project description")]
    NoSkillsFound,

    #[error("No employees matched the project requirements")]
    NoMatches,

    #[error("Employee roster unavailable: {0}")]
    RosterUnavailable(String),
}

/// Project category chosen by the planner. Informational only; it does not
/// influence scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    SoftwareDev,
    Cloud,
    Data,
    Ai,
    Qa,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub project_text: String,
    #[serde(default)]
    pub project_type: ProjectType,
}

/// The outcome of one analysis run. Replaced wholesale by the next run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub project_text: String,
    pub project_type: ProjectType,
    pub required_skills: SkillSet,
    pub extraction_source: ExtractionSource,
    pub results: RankedResults,
}

pub async fn run_analysis(
    request: AnalysisRequest,
    roster: &dyn RosterProvider,
    extractor: &dyn SkillExtractionService,
) -> Result<AnalysisSession, AnalysisError> {
    let records = roster
        .fetch_employees()
        .await
        .map_err(|e| AnalysisError::RosterUnavailable(e.to_string()))?;

    let extraction = extractor.extract(&request.project_text).await;
    if extraction.skills.is_empty() {
        return Err(AnalysisError::NoSkillsFound);
    }
    let required = extraction.skills;

    let employees: Vec<Employee> = records.into_iter().map(Employee::from).collect();
    let scored: Vec<_> = employees
        .iter()
        .filter_map(|employee| score(&required, employee))
        .collect();

    info!(
        "Analysis: {} required skills ({:?}), {} employees, {} matched",
        required.len(),
        extraction.source,
        employees.len(),
        scored.len()
    );

    let results = aggregate(scored)?;

    Ok(AnalysisSession {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        project_text: request.project_text,
        project_type: request.project_type,
        required_skills: required,
        extraction_source: extraction.source,
        results,
    })
}
