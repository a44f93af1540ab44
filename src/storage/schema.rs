//! Database schema and connection management

use crate::core::cache::cache_root;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite store for award and weekly bonus records
pub struct AwardDatabase {
    pub(crate) conn: Connection,
}

impl AwardDatabase {
    /// Open the database under the user cache dir and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path())
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn database_path() -> PathBuf {
        cache_root().join("awards.db")
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS seasonal_awards (
                season INTEGER NOT NULL,
                position INTEGER NOT NULL,
                id TEXT NOT NULL,
                title TEXT NOT NULL,
                definition TEXT NOT NULL,
                amount REAL NOT NULL,
                winner_owner_id TEXT,
                winner_name_override TEXT,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (season, id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS weekly_bonuses (
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                label TEXT NOT NULL,
                note TEXT NOT NULL,
                amount REAL NOT NULL,
                winner_owner_id TEXT,
                winner_name_override TEXT,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (season, week)
            )",
            [],
        )?;

        Ok(())
    }
}
