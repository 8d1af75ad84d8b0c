//! Skill Extractor — turns a project description into the required skill set.
//!
//! Two backends sit behind `SkillExtractionService`:
//! - `HeuristicExtractor`: treats the description as a comma list, no I/O.
//! - `LlmSkillExtractor`: same fast path for short comma lists, otherwise asks
//!   a `TextCompletion` for a JSON array. Any failure there falls back to the
//!   comma-list reading of the raw text.
//!
//! Extraction never fails; the worst case is an empty or degenerate set.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::llm_client::{strip_json_fences, LlmError, TextCompletion};
use crate::matching::normalizer::{normalize, SkillSet};
use crate::matching::prompts::SKILL_EXTRACTION_PROMPT_TEMPLATE;

/// Descriptions at or under this many words that contain a comma are read as
/// an already-delimited skill list.
pub const FAST_PATH_MAX_WORDS: usize = 10;

/// Where a required skill set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Short comma list, normalized directly.
    FastPath,
    /// Parsed from the completion service's JSON array.
    Service,
    /// Heuristic-only backend.
    Heuristic,
    /// Service failed; raw text normalized instead.
    Degraded,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub skills: SkillSet,
    pub source: ExtractionSource,
}

#[async_trait]
pub trait SkillExtractionService: Send + Sync {
    async fn extract(&self, description: &str) -> Extraction;

    /// Short label for logs and health output.
    fn backend(&self) -> &'static str;
}

/// True when the description already looks like "Python, SQL, Docker".
pub fn is_skill_list(description: &str) -> bool {
    description.contains(',') && description.split_whitespace().count() <= FAST_PATH_MAX_WORDS
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicExtractor;

#[async_trait]
impl SkillExtractionService for HeuristicExtractor {
    async fn extract(&self, description: &str) -> Extraction {
        Extraction {
            skills: normalize(Some(description)),
            source: ExtractionSource::Heuristic,
        }
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor {
    completion: Arc<dyn TextCompletion>,
    timeout: Duration,
}

impl LlmSkillExtractor {
    pub fn new(completion: Arc<dyn TextCompletion>, timeout: Duration) -> Self {
        Self {
            completion,
            timeout,
        }
    }

    async fn ask_service(&self, description: &str) -> Result<SkillSet, LlmError> {
        let prompt = SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{project_text}", description);

        let text = tokio::time::timeout(self.timeout, self.completion.complete(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;

        parse_skill_array(&text)
    }
}

#[async_trait]
impl SkillExtractionService for LlmSkillExtractor {
    async fn extract(&self, description: &str) -> Extraction {
        if is_skill_list(description) {
            debug!("Description reads as a skill list; skipping completion call");
            return Extraction {
                skills: normalize(Some(description)),
                source: ExtractionSource::FastPath,
            };
        }

        match self.ask_service(description).await {
            Ok(skills) => Extraction {
                skills,
                source: ExtractionSource::Service,
            },
            Err(e) => {
                warn!("Skill extraction degraded, normalizing raw description instead: {e}");
                Extraction {
                    skills: normalize(Some(description)),
                    source: ExtractionSource::Degraded,
                }
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Parses a JSON array of skill names and normalizes the comma-joined result.
/// Anything other than an array of strings is an error.
fn parse_skill_array(text: &str) -> Result<SkillSet, LlmError> {
    let names: Vec<String> = serde_json::from_str(strip_json_fences(text))?;
    Ok(normalize(Some(&names.join(","))))
}
