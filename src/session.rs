//! Session Store
//!
//! Owns one [`ProgressLog`] per interactive session, keyed by UUID. The
//! log is explicit state passed through the store rather than a
//! process-wide singleton; sessions are created on demand and live for
//! the lifetime of the process (no persistence, never cleared).

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::progress::{ProgressLog, SeriesPoint};

/// In-memory map of session id to progress log
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, ProgressLog>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a session id, minting a fresh one when the client has none
    ///
    /// A known id resumes its existing log; an unknown or absent id gets
    /// an empty log. The returned id is echoed to the client so it can be
    /// threaded through subsequent interactions.
    pub async fn ensure(&self, id: Option<Uuid>) -> Uuid {
        let id = id.unwrap_or_else(Uuid::new_v4);

        let mut sessions = self.sessions.write().await;
        if let Entry::Vacant(slot) = sessions.entry(id) {
            slot.insert(ProgressLog::new());
            tracing::debug!(session_id = %id, "Session created");
        }

        id
    }

    /// Record a workout completion for a session
    ///
    /// Returns `None` for an unknown session, otherwise whether the log
    /// changed.
    pub async fn record_completion(
        &self,
        id: Uuid,
        date: chrono::NaiveDate,
        completed: bool,
    ) -> Option<bool> {
        let mut sessions = self.sessions.write().await;
        let log = sessions.get_mut(&id)?;
        Some(log.record_completion(date, completed))
    }

    /// Cumulative progress series for a session, `None` if unknown
    pub async fn series(&self, id: Uuid) -> Option<Vec<SeriesPoint>> {
        let sessions = self.sessions.read().await;
        Some(sessions.get(&id)?.compute_series())
    }

    /// Distinct completed days for a session, `None` if unknown
    pub async fn completed_days(&self, id: Uuid) -> Option<usize> {
        let sessions = self.sessions.read().await;
        Some(sessions.get(&id)?.len())
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_ensure_mints_and_resumes() {
        let store = SessionStore::new();

        let id = store.ensure(None).await;
        assert_eq!(store.session_count().await, 1);

        let same = store.ensure(Some(id)).await;
        assert_eq!(same, id);
        assert_eq!(store.session_count().await, 1);

        store.ensure(None).await;
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_record_and_series_per_session() {
        let store = SessionStore::new();
        let a = store.ensure(None).await;
        let b = store.ensure(None).await;

        assert_eq!(store.record_completion(a, date("2024-01-01"), true).await, Some(true));
        assert_eq!(store.record_completion(a, date("2024-01-01"), true).await, Some(false));
        assert_eq!(store.record_completion(b, date("2024-01-02"), true).await, Some(true));

        assert_eq!(store.series(a).await.unwrap().len(), 1);
        assert_eq!(store.series(b).await.unwrap().len(), 1);
        assert_eq!(store.completed_days(a).await, Some(1));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::new();

        let ghost = Uuid::new_v4();
        assert!(store.record_completion(ghost, date("2024-01-01"), true).await.is_none());
        assert!(store.series(ghost).await.is_none());
    }
}
