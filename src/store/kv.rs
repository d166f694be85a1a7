//! Durable key-value storage over a single SQLite file. The record set
//! and the user directory are persisted wholesale as JSON blobs under
//! fixed keys, mirroring the legacy storage layout.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::Path;

pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn open(path: &str) -> AppResult<Self> {
        if path != ":memory:" {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes all pairs in one transaction so the two storage keys always
    /// move together.
    pub fn put_all(&mut self, pairs: &[(&str, String)]) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in pairs {
            tx.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
