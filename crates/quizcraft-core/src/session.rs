//! Session-scoped test storage.
//!
//! Each generated test lives in its own session rather than a single
//! process-wide slot, so concurrent learners cannot overwrite each
//! other's tests. Entries expire after a configurable TTL and are purged
//! opportunistically on insert.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::Test;

/// Default session lifetime.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(3600);

struct SessionEntry {
    test: Test,
    created_at: DateTime<Utc>,
}

/// Maps session ids to the test generated for that session.
pub struct SessionStore {
    ttl: chrono::Duration,
    inner: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::max_value()),
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Store a test under a fresh session id, purging expired entries.
    pub fn insert(&self, test: Test) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut map = self.inner.write().expect("session store lock poisoned");
        map.retain(|_, entry| now - entry.created_at < self.ttl);
        map.insert(
            id,
            SessionEntry {
                test,
                created_at: now,
            },
        );
        id
    }

    /// Fetch the test for a session, if it exists and has not expired.
    pub fn get(&self, id: Uuid) -> Option<Test> {
        let map = self.inner.read().expect("session store lock poisoned");
        let entry = map.get(&id)?;
        if Utc::now() - entry.created_at >= self.ttl {
            return None;
        }
        Some(entry.test.clone())
    }

    /// Number of stored sessions, expired entries included until the
    /// next purge.
    pub fn len(&self) -> usize {
        self.inner.read().expect("session store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}
