//! SQLite-backed conversion history and preferences.
//!
//! One long-lived connection behind a mutex serves the whole process.
//! Records are append-only: id assignment and timestamp ordering are the
//! only invariants the store maintains, everything else is immutable data.

use async_trait::async_trait;
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

use crate::core::history::{ConversionRecord, HistoryStore, NewConversion};
use crate::error::Error;

const DEFAULT_BASE_CURRENCY: &str = "USD";
const BASE_CURRENCY_KEY: &str = "base_currency";

pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
}

impl SqliteHistoryStore {
    /// Opens (or creates) the history database inside `data_dir`.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, Error> {
        std::fs::create_dir_all(data_dir.as_ref())
            .map_err(|e| Error::Storage(format!("Cannot create data directory: {e}")))?;
        let conn = Connection::open(data_dir.as_ref().join("history.db"))?;
        Self::from_connection(conn)
    }

    /// An in-memory store, gone when dropped. Used by tests.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS conversion_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                from_currency TEXT NOT NULL,
                to_currency TEXT NOT NULL,
                amount REAL NOT NULL,
                result REAL NOT NULL,
                timestamp INTEGER NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(SqliteHistoryStore {
            conn: Mutex::new(conn),
        })
    }

    /// The persisted base currency preference, defaulting to USD.
    pub fn base_currency(&self) -> Result<String, Error> {
        let conn = self.conn.lock().expect("history store mutex poisoned");
        let mut stmt = conn.prepare("SELECT value FROM preferences WHERE key = ?1")?;
        let mut rows = stmt.query(params![BASE_CURRENCY_KEY])?;
        match rows.next()? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(DEFAULT_BASE_CURRENCY.to_string()),
        }
    }

    pub fn set_base_currency(&self, code: &str) -> Result<(), Error> {
        let conn = self.conn.lock().expect("history store mutex poisoned");
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![BASE_CURRENCY_KEY, code],
        )?;
        debug!("Saved base currency preference: {}", code);
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn append(&self, conversion: NewConversion) -> Result<ConversionRecord, Error> {
        let timestamp = conversion.timestamp_or_now();
        let conn = self.conn.lock().expect("history store mutex poisoned");
        conn.execute(
            "INSERT INTO conversion_history (
                from_currency, to_currency, amount, result, timestamp
            ) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                conversion.from_currency,
                conversion.to_currency,
                conversion.amount,
                conversion.result,
                timestamp
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("Recorded conversion {} in history", id);

        Ok(ConversionRecord {
            id,
            from_currency: conversion.from_currency,
            to_currency: conversion.to_currency,
            amount: conversion.amount,
            result: conversion.result,
            timestamp,
        })
    }

    async fn list_all(&self) -> Result<Vec<ConversionRecord>, Error> {
        let conn = self.conn.lock().expect("history store mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, from_currency, to_currency, amount, result, timestamp
             FROM conversion_history
             ORDER BY timestamp DESC, id DESC",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(ConversionRecord {
                    id: row.get(0)?,
                    from_currency: row.get(1)?,
                    to_currency: row.get(2)?,
                    amount: row.get(3)?,
                    result: row.get(4)?,
                    timestamp: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn clear_all(&self) -> Result<(), Error> {
        let conn = self.conn.lock().expect("history store mutex poisoned");
        conn.execute("DELETE FROM conversion_history", [])?;
        debug!("Cleared conversion history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_append_assigns_increasing_ids_and_timestamp() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();

        let first = store
            .append(NewConversion::new("USD", "EUR", 100.0, 92.13))
            .await
            .unwrap();
        let second = store
            .append(NewConversion::new("EUR", "GBP", 50.0, 42.9))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert!(first.timestamp > 0);
        assert_eq!(first.from_currency, "USD");
        assert_eq!(first.result, 92.13);
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();

        for (ts, from) in [(1_000, "USD"), (3_000, "EUR"), (2_000, "GBP")] {
            store
                .append(NewConversion::new(from, "JPY", 1.0, 150.0).with_timestamp(ts))
                .await
                .unwrap();
        }

        let records = store.list_all().await.unwrap();
        let timestamps: Vec<i64> = records.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![3_000, 2_000, 1_000]);
        assert_eq!(records[0].from_currency, "EUR");
    }

    #[tokio::test]
    async fn test_timestamp_ties_break_toward_later_insert() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();

        let first = store
            .append(NewConversion::new("USD", "EUR", 1.0, 0.9).with_timestamp(5_000))
            .await
            .unwrap();
        let second = store
            .append(NewConversion::new("USD", "GBP", 1.0, 0.8).with_timestamp(5_000))
            .await
            .unwrap();

        let records = store.list_all().await.unwrap();
        assert_eq!(records[0].id, second.id);
        assert_eq!(records[1].id, first.id);
    }

    #[tokio::test]
    async fn test_clear_all_is_idempotent() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();

        store
            .append(NewConversion::new("USD", "EUR", 100.0, 92.13))
            .await
            .unwrap();

        store.clear_all().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());

        // Clearing an already-empty store succeeds
        store.clear_all().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_every_record() {
        let store = Arc::new(SqliteHistoryStore::open_in_memory().unwrap());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append(NewConversion::new("USD", "EUR", i as f64, i as f64 * 0.9))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20, "ids must be distinct");
        assert_eq!(store.list_all().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_base_currency_defaults_to_usd() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        assert_eq!(store.base_currency().unwrap(), "USD");
    }

    #[tokio::test]
    async fn test_base_currency_survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = SqliteHistoryStore::open(dir.path()).unwrap();
            store.set_base_currency("EUR").unwrap();
            store.set_base_currency("BGN").unwrap();
        }

        let store = SqliteHistoryStore::open(dir.path()).unwrap();
        assert_eq!(store.base_currency().unwrap(), "BGN");
    }

    #[tokio::test]
    async fn test_history_survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = SqliteHistoryStore::open(dir.path()).unwrap();
            store
                .append(NewConversion::new("USD", "EUR", 10.0, 9.21))
                .await
                .unwrap();
        }

        let store = SqliteHistoryStore::open(dir.path()).unwrap();
        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_currency, "EUR");
    }
}
