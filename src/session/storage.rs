// src/session/storage.rs
//
// Key/value storage backing the persisted session.
//
// Implementations are dumb: no parsing of values, no events.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

// ============================================================================
// SQLITE
// ============================================================================

pub struct SqliteSessionStorage {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionStorage {
    /// Wraps the pool and makes sure the schema exists.
    pub fn new(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        Ok(Self { pool })
    }
}

impl SessionStorage for SqliteSessionStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        let value = conn
            .query_row(
                "SELECT value FROM session_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO session_storage (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM session_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

// ============================================================================
// IN-MEMORY
// ============================================================================

/// Storage that lives as long as the process, for embedding shells that do
/// not want the session to outlive them.
#[derive(Default)]
pub struct MemorySessionStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_connection_pool;

    fn sqlite_storage(dir: &tempfile::TempDir) -> SqliteSessionStorage {
        let pool = create_connection_pool(&dir.path().join("session.db")).unwrap();
        SqliteSessionStorage::new(Arc::new(pool)).unwrap()
    }

    #[test]
    fn test_sqlite_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = sqlite_storage(&dir);

        assert_eq!(storage.get("auth").unwrap(), None);

        storage.set("auth", "first").unwrap();
        storage.set("auth", "second").unwrap();
        assert_eq!(storage.get("auth").unwrap().as_deref(), Some("second"));

        storage.remove("auth").unwrap();
        assert_eq!(storage.get("auth").unwrap(), None);
    }

    #[test]
    fn test_sqlite_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        sqlite_storage(&dir).set("auth", "kept").unwrap();

        let reopened = sqlite_storage(&dir);
        assert_eq!(reopened.get("auth").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemorySessionStorage::new();
        storage.set("auth", "value").unwrap();
        assert_eq!(storage.get("auth").unwrap().as_deref(), Some("value"));
        storage.remove("auth").unwrap();
        assert_eq!(storage.get("auth").unwrap(), None);
    }
}
