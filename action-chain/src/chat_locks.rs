//! Per-chat serialization.
//!
//! Events of one chat are processed one at a time; distinct chats run concurrently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed async mutex over chat ids.
#[derive(Clone, Default)]
pub struct ChatLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>>,
}

impl ChatLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other task holds `chat_id`; the lock is released when the guard drops.
    pub async fn lock_chat(&self, chat_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            // Idle entries (nobody holding or waiting) are dropped as the map is touched.
            locks.retain(|id, lock| *id == chat_id || Arc::strong_count(lock) > 1);
            locks
                .entry(chat_id)
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of chats with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .map(|locks| locks.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
