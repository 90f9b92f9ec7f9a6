/// SQLite record store adapter
///
/// Implements both record persistence ports on a single `records` table.
/// Record ids and timestamps are assigned here, at the persistence boundary.
use crate::domain::models::{Payload, Record};
use crate::error::{AppError, Result};
use crate::ports::persistence::{RequestPersistencePort, TextPersistencePort};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// SQLite record store implementation
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    /// Create a new SQLite record store with the given database path
    pub fn new(db_path: PathBuf) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a store backed by a private in-memory database
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.connection()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| AppError::Migration(e.to_string()))?;

        Ok(())
    }

    /// Look up a record by id
    pub async fn get_record(&self, id: &str) -> Result<Option<Record>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, input_kind, input, output_kind, output, created_at
             FROM records WHERE id = ?1",
        )?;

        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            let input_kind: String = row.get(1)?;
            let output_kind: String = row.get(3)?;

            Ok(Some(Record {
                id: row.get(0)?,
                input: decode_payload(&input_kind, row.get(2)?)?,
                output: decode_payload(&output_kind, row.get(4)?)?,
                created_at: row.get(5)?,
            }))
        } else {
            Ok(None)
        }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Storage("record store connection poisoned".to_string()))
    }

    fn insert(&self, input: Payload, output: Payload) -> Result<Record> {
        let record = Record {
            id: Uuid::new_v4().to_string(),
            input,
            output,
            created_at: chrono::Utc::now().timestamp(),
        };

        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO records (id, input_kind, input, output_kind, output, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.input.kind(),
                record.input.as_bytes(),
                record.output.kind(),
                record.output.as_bytes(),
                record.created_at,
            ],
        )?;

        Ok(record)
    }
}

fn decode_payload(kind: &str, bytes: Vec<u8>) -> Result<Payload> {
    Payload::from_parts(kind, bytes)
        .ok_or_else(|| AppError::Storage(format!("unreadable {} payload", kind)))
}

#[async_trait]
impl TextPersistencePort for SqliteRecordStore {
    async fn save(&self, input: &str, output: &str) -> Result<Record> {
        self.insert(
            Payload::Text(input.to_string()),
            Payload::Text(output.to_string()),
        )
    }
}

#[async_trait]
impl RequestPersistencePort for SqliteRecordStore {
    async fn save(&self, input: &[u8], output: &[u8]) -> Result<Record> {
        self.insert(Payload::Binary(input.to_vec()), Payload::Binary(output.to_vec()))
    }
}
