//! Test doubles for the roster and the completion service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::db::{RosterError, RosterProvider};
use crate::llm_client::{LlmError, TextCompletion};
use crate::models::employee::EmployeeRecord;

pub fn record(id: i64, name: &str, skills: &str) -> EmployeeRecord {
    EmployeeRecord {
        id,
        name: name.to_string(),
        skills: Some(skills.to_string()),
    }
}

/// Fixed roster; counts fetches.
pub struct InMemoryRoster {
    records: Vec<EmployeeRecord>,
    fetches: AtomicUsize,
}

impl InMemoryRoster {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterProvider for InMemoryRoster {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, RosterError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Roster whose fetch always fails.
pub struct FailingRoster;

#[async_trait]
impl RosterProvider for FailingRoster {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, RosterError> {
        Err(RosterError::Database(sqlx::Error::PoolTimedOut))
    }
}

enum Reply {
    Text(String),
    Fail,
}

/// Completion double returning a canned reply, optionally after a delay.
pub struct CannedCompletion {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl CannedCompletion {
    fn with(reply: Reply, delay: Option<Duration>) -> Self {
        Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn ok(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()), None)
    }

    pub fn failing() -> Self {
        Self::with(Reply::Fail, None)
    }

    pub fn slow(text: &str, delay: Duration) -> Self {
        Self::with(Reply::Text(text.to_string()), Some(delay))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for CannedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}
