// Key-value persistence over SQLite: one table, one row per key, full
// overwrite on write.
// Based on https://github.com/rusqlite/rusqlite/blob/master/examples/persons/main.rs
use rusqlite::{Connection, OptionalExtension, Result};
use thiserror::Error;

// The single entry holding the serialized task collection
pub const TODOS_STORAGE_KEY: &str = "todos-data";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage access failed: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("stored value under {key:?} is not valid JSON: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub struct Storage {
    pub db_con: Connection,
}

impl Storage {
    pub fn create_table_if_not_exists(&self) {
        self.db_con
            .execute(
                "CREATE TABLE IF NOT EXISTS local_store (
                Key TEXT PRIMARY KEY,
                Value TEXT
            );",
                (),
            )
            .expect("Could not create the initial DB table");
    }

    // READ: the raw value under a key; None if the entry was never written
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.db_con
            .query_row("SELECT Value FROM local_store WHERE Key = ?;", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    // WRITE: replace the entry wholesale
    pub fn set_item(&self, key: &str, value: &str) -> Result<usize> {
        self.db_con.execute(
            "INSERT INTO local_store (Key, Value) VALUES (?1, ?2)
             ON CONFLICT(Key) DO UPDATE SET Value = excluded.Value;",
            (key, value),
        )
    }
}
