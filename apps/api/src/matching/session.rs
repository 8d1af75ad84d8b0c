use std::sync::Arc;

use tokio::sync::RwLock;

use crate::matching::analysis::AnalysisSession;

/// Holds the latest successful analysis. Each new session replaces the
/// previous one whole; nothing is kept as history.
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Arc<AnalysisSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, session: AnalysisSession) -> Arc<AnalysisSession> {
        let session = Arc::new(session);
        *self.current.write().await = Some(session.clone());
        session
    }

    pub async fn current(&self) -> Option<Arc<AnalysisSession>> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::analysis::{run_analysis, AnalysisRequest, ProjectType};
    use crate::matching::extractor::HeuristicExtractor;
    use crate::testing::{record, InMemoryRoster};

    async fn session(text: &str) -> AnalysisSession {
        let roster = InMemoryRoster::new(vec![record(1, "Asha", "Python, SQL")]);
        run_analysis(
            AnalysisRequest {
                project_text: text.to_string(),
                project_type: ProjectType::Cloud,
            },
            &roster,
            &HeuristicExtractor,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_store_starts_empty() {
        assert!(SessionStore::new().current().await.is_none());
    }

    #[tokio::test]
    async fn test_replace_swaps_whole_session() {
        let store = SessionStore::new();
        let first = store.replace(session("Python").await).await;
        let second = store.replace(session("SQL").await).await;

        let current = store.current().await.unwrap();
        assert_eq!(current.id, second.id);
        assert_ne!(current.id, first.id);
        assert_eq!(current.project_text, "SQL");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SessionStore::new();
        let handle = store.clone();
        store.replace(session("Python").await).await;
        assert!(handle.current().await.is_some());
    }
}
