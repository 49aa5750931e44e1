//! Session repository: per-user session maps persisted in SQLite.
//!
//! One row per user; the session map is stored as a JSON object. Writing an empty session deletes
//! the row.

use actbot_core::{Session, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteSessionStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteSessionStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating sessions table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                user_id INTEGER PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    pub async fn load(&self, user_id: i64) -> Result<Session, StorageError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT data FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        match row {
            Some((data,)) => {
                serde_json::from_str(&data).map_err(|e| StorageError::Corrupt {
                    user_id,
                    reason: e.to_string(),
                })
            }
            None => Ok(Session::new()),
        }
    }

    pub async fn save(&self, user_id: i64, session: &Session) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        if session.is_empty() {
            sqlx::query("DELETE FROM sessions WHERE user_id = ?")
                .bind(user_id)
                .execute(pool)
                .await?;
            debug!(user_id = user_id, "Session row deleted");
            return Ok(());
        }

        let data = serde_json::to_string(session)?;
        sqlx::query(
            r#"
            INSERT INTO sessions (user_id, data, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(&data)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        debug!(user_id = user_id, keys = session.len(), "Session saved");
        Ok(())
    }

    /// When the user's session was last written, if it exists.
    pub async fn updated_at(&self, user_id: i64) -> Result<Option<DateTime<Utc>>, StorageError> {
        let row: Option<(DateTime<Utc>,)> =
            sqlx::query_as("SELECT updated_at FROM sessions WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(self.pool_manager.pool())
                .await?;
        Ok(row.map(|(updated_at,)| updated_at))
    }

    /// Number of users with a stored session.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, user_id: i64) -> actbot_core::Result<Session> {
        Ok(self.load(user_id).await?)
    }

    async fn set(&self, user_id: i64, session: Session) -> actbot_core::Result<()> {
        Ok(self.save(user_id, &session).await?)
    }
}
