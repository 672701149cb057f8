use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::UserId;

/// One past question/answer pair.
#[derive(Clone, Debug)]
pub struct Exchange {
    pub query: String,
    pub reply: String,
    pub at: DateTime<Utc>,
}

/// Per-user scratch record. Created on first observed message, never
/// destroyed; only appended to or merged into.
#[derive(Clone, Debug, Default)]
pub struct UserRecord {
    pub chat_history: Vec<Exchange>,
    pub preferences: HashMap<String, String>,
}

/// In-memory user registry. No eviction, no persistence; concurrent inserts
/// are insert-if-absent and preference merges are last-write-wins, which is
/// all the message flow requires.
#[derive(Default)]
pub struct UserStore {
    inner: Mutex<HashMap<UserId, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a record exists for `user`. Returns true if it was created.
    pub async fn touch(&self, user: UserId) -> bool {
        let mut map = self.inner.lock().await;
        if map.contains_key(&user) {
            return false;
        }
        map.insert(user, UserRecord::default());
        true
    }

    pub async fn record_exchange(&self, user: UserId, query: &str, reply: &str) {
        let mut map = self.inner.lock().await;
        map.entry(user).or_default().chat_history.push(Exchange {
            query: query.to_string(),
            reply: reply.to_string(),
            at: Utc::now(),
        });
    }

    pub async fn set_preference(&self, user: UserId, key: &str, value: &str) {
        let mut map = self.inner.lock().await;
        map.entry(user)
            .or_default()
            .preferences
            .insert(key.to_string(), value.to_string());
    }

    pub async fn preference(&self, user: UserId, key: &str) -> Option<String> {
        let map = self.inner.lock().await;
        map.get(&user).and_then(|r| r.preferences.get(key).cloned())
    }

    pub async fn history_len(&self, user: UserId) -> usize {
        let map = self.inner.lock().await;
        map.get(&user).map(|r| r.chat_history.len()).unwrap_or(0)
    }

    /// Number of users seen so far (for `/stats`).
    pub async fn user_count(&self) -> usize {
        self.inner.lock().await.len()
    }
}
