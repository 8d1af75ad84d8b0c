use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

/// Connection settings for the employee roster database.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

/// Endpoint, credentials and timeout for the text-completion service.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
}

/// Which `SkillExtractionService` implementation to wire at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Comma-list heuristic only; never calls out.
    Heuristic,
    /// Heuristic fast path with an LLM-backed fallback.
    Llm,
}

impl FromStr for ExtractionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ExtractionMode::Heuristic),
            "llm" => Ok(ExtractionMode::Llm),
            other => bail!("SKILL_EXTRACTION_MODE must be 'llm' or 'heuristic', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub roster: RosterConfig,
    /// Present only when `extraction_mode` is `Llm`.
    pub llm: Option<LlmConfig>,
    pub extraction_mode: ExtractionMode,
    pub extraction_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let extraction_mode: ExtractionMode = env.optional("SKILL_EXTRACTION_MODE", "llm")?;
        let extraction_timeout =
            Duration::from_secs(env.optional("SKILL_EXTRACTION_TIMEOUT_SECS", "20")?);

        let llm = match extraction_mode {
            ExtractionMode::Llm => Some(LlmConfig {
                api_url: env
                    .get("LLM_API_URL")
                    .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
                api_key: env.require("ANTHROPIC_API_KEY")?,
                // Kept below the extraction timeout.
                request_timeout: Duration::from_secs(
                    env.optional("LLM_REQUEST_TIMEOUT_SECS", "15")?,
                ),
            }),
            ExtractionMode::Heuristic => None,
        };

        Ok(Config {
            roster: RosterConfig {
                database_url: env.require("DATABASE_URL")?,
                max_connections: env.optional("ROSTER_MAX_CONNECTIONS", "5")?,
                connect_timeout: Duration::from_secs(
                    env.optional("ROSTER_CONNECT_TIMEOUT_SECS", "10")?,
                ),
            },
            llm,
            extraction_mode,
            extraction_timeout,
            port: env.optional("PORT", "8080")?,
            rust_log: env.get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .with_context(|| format!("Required environment variable '{key}' is not set"))
    }

    fn optional<T>(&self, key: &str, default: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.get(key).unwrap_or_else(|| default.to_string());
        parse_value(key, &raw)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("{key} has an invalid value '{raw}': {e}"))
}
