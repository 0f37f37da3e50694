//! Durable key/value storage
//!
//! A small string-to-string store backed by a single SQLite file. It plays
//! the role browser local storage plays for the web dashboard: the session
//! record and per-user table lists are kept here under fixed key names, with
//! no schema versioning of the stored values and last-write-wins semantics.

use crate::error::{DashError, Result};
use anyhow::Context;
use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default database location
pub const STORAGE_DB_ENV: &str = "CONTENTDASH_STORAGE_DB";

/// Storage backend for client-side state
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    /// Create a new storage instance
    ///
    /// Initializes the database file in the user's data directory unless
    /// `CONTENTDASH_STORAGE_DB` points somewhere else.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var(STORAGE_DB_ENV) {
            return Self::new_with_path(override_path);
        }

        Self::new_with_path(Self::default_path()?)
    }

    /// Default database location inside the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "contentdash", "contentdash")
            .ok_or_else(|| DashError::Storage("Could not determine data directory".into()))?;
        Ok(proj_dirs.data_dir().join("storage.db"))
    }

    /// Create a new storage instance that uses the specified database path.
    ///
    /// # Examples
    ///
    /// ```
    /// use contentdash::storage::SqliteStorage;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let storage = SqliteStorage::new_with_path(dir.path().join("storage.db")).unwrap();
    /// assert!(storage.get("user").unwrap().is_none());
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| DashError::Storage(e.to_string()))?;
        }

        let storage = Self { db_path };
        storage.init()?;
        tracing::debug!(path = %storage.db_path.display(), "Opened local storage");
        Ok(storage)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open database")
            .map_err(|e| DashError::Storage(e.to_string()).into())
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create tables")
        .map_err(|e| DashError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Read the value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;

        let value = conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .context("Failed to query entry")
            .map_err(|e| DashError::Storage(e.to_string()))?;

        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO entries (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )
        .context("Failed to write entry")
        .map_err(|e| DashError::Storage(e.to_string()))?;

        tracing::trace!(key, bytes = value.len(), "Stored entry");
        Ok(())
    }

    /// Remove `key`; removing a missing key is not an error
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.open()?;

        conn.execute("DELETE FROM entries WHERE key = ?", params![key])
            .context("Failed to delete entry")
            .map_err(|e| DashError::Storage(e.to_string()))?;

        Ok(())
    }

    /// List keys that start with `prefix`, sorted
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let conn = self.open()?;

        let mut stmt = conn
            .prepare("SELECT key FROM entries WHERE substr(key, 1, ?1) = ?2 ORDER BY key")
            .context("Failed to prepare statement")
            .map_err(|e| DashError::Storage(e.to_string()))?;

        let keys = stmt
            .query_map(params![prefix.chars().count() as i64, prefix], |row| {
                row.get::<_, String>(0)
            })
            .context("Failed to query keys")
            .map_err(|e| DashError::Storage(e.to_string()))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read keys")
            .map_err(|e| DashError::Storage(e.to_string()))?;

        Ok(keys)
    }

    /// Read and deserialize a JSON value stored under `key`
    ///
    /// A value that no longer parses is reported as a storage error rather
    /// than silently discarded, so the caller can decide what to show.
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(|e| {
                    DashError::Storage(format!("Corrupt record under {}: {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and store it under `key`
    pub fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| DashError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
        self.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    /// Returns both the storage and the `TempDir` so the caller keeps the
    /// directory alive for the duration of the test.
    fn create_test_storage() -> (SqliteStorage, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let storage =
            SqliteStorage::new_with_path(dir.path().join("storage.db")).expect("create storage");
        (storage, dir)
    }

    #[test]
    fn test_init_creates_entries_table() {
        let (storage, _dir) = create_test_storage();
        let conn = Connection::open(storage.path()).expect("open connection");
        let count: i64 = conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='entries'",
                [],
                |r| r.get(0),
            )
            .expect("query row");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let (storage, _dir) = create_test_storage();
        storage.set("user", r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(
            storage.get("user").unwrap().as_deref(),
            Some(r#"{"email":"a@b.c"}"#)
        );
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (storage, _dir) = create_test_storage();
        storage.set("k", "first").unwrap();
        storage.set("k", "second").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (storage, _dir) = create_test_storage();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn test_keys_with_prefix_does_not_treat_wildcards_specially() {
        let (storage, _dir) = create_test_storage();
        storage.set("userTables:a@x.io", "[]").unwrap();
        storage.set("userTables:b@x.io", "[]").unwrap();
        storage.set("userTablesSelected:a@x.io", "\"1\"").unwrap();
        storage.set("user", "{}").unwrap();

        let keys = storage.keys_with_prefix("userTables:").unwrap();
        assert_eq!(keys, vec!["userTables:a@x.io", "userTables:b@x.io"]);

        assert!(storage.keys_with_prefix("user%").unwrap().is_empty());
    }

    #[test]
    fn test_json_helpers_report_corrupt_records() {
        let (storage, _dir) = create_test_storage();
        storage.set_json("nums", &vec![1, 2, 3]).unwrap();
        let nums: Option<Vec<i32>> = storage.get_json("nums").unwrap();
        assert_eq!(nums, Some(vec![1, 2, 3]));

        storage.set("nums", "not json").unwrap();
        let err = storage.get_json::<Vec<i32>>("nums").unwrap_err();
        assert!(err.to_string().contains("Corrupt record under nums"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.db");
        SqliteStorage::new_with_path(&path)
            .unwrap()
            .set("k", "v")
            .unwrap();

        let reopened = SqliteStorage::new_with_path(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    #[serial]
    fn test_new_respects_env_override() {
        let dir = tempdir().expect("failed to create tempdir");
        let db_path = dir.path().join("nested").join("storage.db");
        env::set_var(STORAGE_DB_ENV, db_path.to_string_lossy().to_string());

        let storage = SqliteStorage::new().expect("new failed with env override");
        env::remove_var(STORAGE_DB_ENV);

        assert_eq!(storage.path(), db_path.as_path());
        assert!(db_path.parent().unwrap().exists());
    }
}
