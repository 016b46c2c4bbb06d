//! SQLite-backed local store for markstash.
//!
//! Provides the [`LocalStore`] struct that wraps a `rusqlite::Connection`
//! behind the [`KeyValueStore`] contract and automatically runs schema
//! migrations on open. The schema is a single `kv_entries` table; every
//! collection lives whole under one key, JSON-encoded.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::kv::KeyValueStore;
use crate::types::errors::StoreError;

/// Current schema version. Bump this when adding a new migration.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Local key-value store backed by a SQLite connection.
///
/// All read-modify-write sequences from the repositories go through this
/// single connection, so calls on one store serialize naturally. There is
/// no compare-and-swap: concurrent callers through separate stores are
/// last-writer-wins.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (or creates) a store at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the connection cannot be
    /// established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Opens an in-memory store and runs migrations.
    ///
    /// Useful for testing — the store is discarded when dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Returns the schema version recorded in the store (0 if none).
    pub fn schema_version(&self) -> i32 {
        self.conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |row| row.get(0),
            )
            .unwrap_or(0)
    }

    /// Runs all pending schema migrations. Each runs exactly once and is
    /// recorded in the `schema_version` table. Safe to call on every open.
    fn run_migrations(&self) -> Result<(), StoreError> {
        self.migrate().map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             CREATE TABLE IF NOT EXISTS schema_version (
                 version INTEGER PRIMARY KEY,
                 applied_at INTEGER NOT NULL,
                 description TEXT NOT NULL
             );",
        )?;

        if self.schema_version() < 1 {
            self.migration_v1()?;
            self.record_version(1, "Initial schema: kv_entries")?;
        }

        Ok(())
    }

    /// V1: the key-value table every collection lives in.
    fn migration_v1(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_entries (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL,
                 updated_at INTEGER NOT NULL
             );",
        )
    }

    fn record_version(&self, version: i32, description: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
            params![version, Self::now(), description],
        )?;
        Ok(())
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
