//! SQLite-backed usage recorder.
//!
//! One row per generation request in the `calls` table. Rows are never
//! updated or deleted.
//!
//! The recorder owns a single connection behind a mutex, so concurrent tool
//! calls in this process are serialized here. Other processes writing the same
//! file are handled by SQLite's busy timeout.

use rusqlite::{Connection, params};
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::error::StorageError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS calls (
  id TEXT PRIMARY KEY,
  ts REAL,
  theme TEXT,
  style TEXT,
  length TEXT,
  tone TEXT
)";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A single persisted generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRecord {
    pub id: String,
    /// Wall-clock time of the call, in fractional seconds since the epoch.
    pub ts: f64,
    pub theme: String,
    pub style: String,
    pub length: String,
    pub tone: String,
}

/// Append-only writer for the usage log.
#[derive(Debug)]
pub struct UsageRecorder {
    conn: Mutex<Connection>,
}

impl UsageRecorder {
    /// Open (or create) the usage database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        info!("Usage log opened at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a private in-memory usage log.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Append one record for a generation request.
    ///
    /// The parameters are stored exactly as the caller supplied them.
    pub fn record(
        &self,
        theme: &str,
        style: &str,
        length: &str,
        tone: &str,
    ) -> Result<UsageRecord, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;

        // Stamped under the lock so rowid order and ts order agree.
        let now = chrono::Utc::now();
        let record = UsageRecord {
            id: Uuid::new_v4().to_string(),
            ts: now.timestamp_micros() as f64 / 1_000_000.0,
            theme: theme.to_string(),
            style: style.to_string(),
            length: length.to_string(),
            tone: tone.to_string(),
        };

        conn.execute(
            "INSERT INTO calls (id, ts, theme, style, length, tone) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.ts,
                record.theme,
                record.style,
                record.length,
                record.tone,
            ],
        )?;

        debug!(id = %record.id, ts = record.ts, "Usage recorded");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn read_rows(path: &Path) -> Vec<(String, f64, String, String, String, String)> {
        let conn = Connection::open(path).unwrap();
        let mut stmt = conn
            .prepare("SELECT id, ts, theme, style, length, tone FROM calls ORDER BY rowid")
            .unwrap();
        stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
    }

    #[test]
    fn test_record_persists_raw_parameters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.db");
        let recorder = UsageRecorder::open(&path).unwrap();

        let record = recorder.record("ocean", "Haiku", "short", "wistful").unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        let (id, ts, theme, style, length, tone) = &rows[0];
        assert_eq!(id, &record.id);
        assert_eq!(*ts, record.ts);
        assert_eq!(theme, "ocean");
        assert_eq!(style, "Haiku");
        assert_eq!(length, "short");
        assert_eq!(tone, "wistful");
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_records_get_distinct_ids_and_ordered_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.db");
        let recorder = UsageRecorder::open(&path).unwrap();

        for _ in 0..3 {
            recorder.record("rain", "sonnet", "long", "dark").unwrap();
        }

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_ne!(rows[0].0, rows[1].0);
        assert_ne!(rows[1].0, rows[2].0);
        assert_ne!(rows[0].0, rows[2].0);
        assert!(rows[0].1 <= rows[1].1);
        assert!(rows[1].1 <= rows[2].1);
    }

    #[test]
    fn test_open_is_idempotent_and_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("usage.db");

        UsageRecorder::open(&path)
            .unwrap()
            .record("a", "b", "c", "d")
            .unwrap();
        UsageRecorder::open(&path)
            .unwrap()
            .record("e", "f", "g", "h")
            .unwrap();

        assert_eq!(read_rows(&path).len(), 2);
    }

    #[test]
    fn test_record_fails_when_table_is_gone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.db");
        let recorder = UsageRecorder::open(&path).unwrap();

        Connection::open(&path)
            .unwrap()
            .execute_batch("DROP TABLE calls")
            .unwrap();

        let result = recorder.record("x", "haiku", "short", "funny");
        assert!(matches!(result, Err(StorageError::Sqlite(_))));
    }

    #[test]
    fn test_concurrent_writers_are_serialized() {
        let recorder = Arc::new(UsageRecorder::open_in_memory().unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let recorder = recorder.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        recorder
                            .record(&format!("theme {i}"), "haiku", "short", "neutral")
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let conn = recorder.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM calls", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 80);

        let mut stmt = conn.prepare("SELECT ts FROM calls ORDER BY rowid").unwrap();
        let stamps: Vec<f64> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(
            stamps.windows(2).all(|pair| pair[0] <= pair[1]),
            "timestamps out of insertion order"
        );
    }
}
