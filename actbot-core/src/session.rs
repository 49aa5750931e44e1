//! Per-user session state.
//!
//! A session is a map from state key to JSON value, read by start/finish conditions to tell whether an
//! action is mid-conversation with a user. Storage is injected through [`SessionStore`]; actions use the
//! [`SessionHandle`] bound to the event's sender.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ActbotError, Result};

/// State of one user: key → value.
pub type Session = HashMap<String, Value>;

/// Key-value store of sessions keyed by user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's session; an unknown user has an empty one.
    async fn get(&self, user_id: i64) -> Result<Session>;
    /// Replaces the user's session.
    async fn set(&self, user_id: i64, session: Session) -> Result<()>;
}

/// Process-local session store for development and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored session.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Session> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&user_id).cloned().unwrap_or_default())
    }

    async fn set(&self, user_id: i64, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if session.is_empty() {
            sessions.remove(&user_id);
        } else {
            sessions.insert(user_id, session);
        }
        Ok(())
    }
}

/// Session accessor bound to one user. Every write is a read-modify-write of the whole map.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    user_id: i64,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>, user_id: i64) -> Self {
        Self { store, user_id }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Whole session of the user.
    pub async fn load(&self) -> Result<Session> {
        self.store.get(self.user_id).await
    }

    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load().await?.remove(key))
    }

    /// Reads `key` and deserializes it; a value of the wrong shape is an error.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ActbotError::Session(format!("key {}: {}", key, e))),
            None => Ok(None),
        }
    }

    /// True when `key` is present.
    pub async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.load().await?.contains_key(key))
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| ActbotError::Session(format!("key {}: {}", key, e)))?;
        let mut session = self.load().await?;
        session.insert(key.to_string(), value);
        debug!(user_id = self.user_id, key = %key, "Session key set");
        self.store.set(self.user_id, session).await
    }

    pub async fn remove(&self, key: &str) -> Result<Option<Value>> {
        let mut session = self.load().await?;
        let removed = session.remove(key);
        if removed.is_some() {
            debug!(user_id = self.user_id, key = %key, "Session key removed");
            self.store.set(self.user_id, session).await?;
        }
        Ok(removed)
    }

    /// Drops every key of the user.
    pub async fn clear(&self) -> Result<()> {
        debug!(user_id = self.user_id, "Session cleared");
        self.store.set(self.user_id, Session::new()).await
    }
}
