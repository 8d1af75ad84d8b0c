// Skill matching: normalization, extraction, fit scoring, ranking.
// The only I/O is the completion call behind SkillExtractionService.

pub mod aggregator;
pub mod analysis;
pub mod export;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod scorer;
pub mod session;
