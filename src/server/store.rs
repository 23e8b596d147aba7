use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::record::{AdRecord, NewAdRecord};

/// Handle to the ads table. Connections are opened per call on the blocking
/// pool; the schema is created on first use.
#[derive(Clone, Debug)]
pub struct AdStore {
    path: PathBuf,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite join error: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl AdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn init(&self) -> Result<(), StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let conn = open_connection(path)?;
            init_schema(&conn)?;
            Ok(())
        })
        .await?
    }

    /// Insert one record and return it with its assigned id.
    pub async fn insert(&self, record: &NewAdRecord) -> Result<AdRecord, StoreError> {
        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || -> Result<AdRecord, StoreError> {
            let conn = open_connection(path)?;
            init_schema(&conn)?;

            conn.execute(
                "INSERT INTO ads (date, cost, lead_count, message_count) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    record.date,
                    record.cost,
                    record.lead_count,
                    record.message_count
                ],
            )?;

            Ok(AdRecord {
                id: conn.last_insert_rowid(),
                date: record.date,
                cost: record.cost,
                lead_count: record.lead_count,
                message_count: record.message_count,
            })
        })
        .await?
    }

    /// All records in insertion (id) order.
    pub async fn list(&self) -> Result<Vec<AdRecord>, StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<AdRecord>, StoreError> {
            let conn = open_connection(path)?;
            init_schema(&conn)?;

            let mut stmt = conn
                .prepare("SELECT id, date, cost, lead_count, message_count FROM ads ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(AdRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    cost: row.get(2)?,
                    lead_count: row.get(3)?,
                    message_count: row.get(4)?,
                })
            })?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await?
    }
}

fn open_connection(path: PathBuf) -> Result<rusqlite::Connection, rusqlite::Error> {
    let conn = rusqlite::Connection::open(path)?;
    let _ = conn.busy_timeout(Duration::from_secs(5));
    let _ = conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
    Ok(conn)
}

fn init_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS ads (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            cost TEXT NOT NULL,
            lead_count INTEGER NOT NULL,
            message_count INTEGER NOT NULL
        );",
    )
}
