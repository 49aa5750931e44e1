//! Storage crate: SQLite persistence for user sessions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`session_repo`] – SqliteSessionStore, a [`SessionStore`](actbot_core::SessionStore) over SQLite
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod session_repo;
mod sqlite_pool;

pub use error::StorageError;
pub use session_repo::SqliteSessionStore;
pub use sqlite_pool::SqlitePoolManager;
