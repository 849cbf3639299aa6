//! Typed access to the `kv` table.
//!
//! # Responsibility
//! - Keep SQL details of the namespace inside the storage boundary.
//! - Serialize/deserialize values as JSON at the boundary, not in callers.
//!
//! # Invariants
//! - A missing key reads as `None`; an unparseable value is an explicit
//!   [`StorageError::Decode`], never silently `None`.
//! - `put` replaces the whole value under the key (read-modify-write is the
//!   caller's concern, matching the original whole-array persistence shape).

use super::{StorageError, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value view over a migrated, ready connection.
#[derive(Debug)]
pub struct KvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Reads the raw JSON text under `key`, if present.
    pub fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Reads and decodes the value under `key`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get_raw(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|err| {
                StorageError::Decode {
                    key: key.to_string(),
                    message: err.to_string(),
                }
            }),
        }
    }

    /// Encodes `value` as JSON and writes it under `key`, replacing any
    /// previous value.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|err| StorageError::Encode {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
            params![key, raw],
        )?;
        Ok(())
    }

    /// Removes `key` from the namespace; no-op when absent.
    pub fn delete(&self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::KvStore;
    use crate::db::open_db_in_memory;
    use crate::storage::StorageError;

    #[test]
    fn missing_key_reads_as_none() {
        let conn = open_db_in_memory().unwrap();
        let kv = KvStore::new(&conn);
        assert!(kv.get_json::<Vec<String>>("absent").unwrap().is_none());
    }

    #[test]
    fn put_replaces_previous_value() {
        let conn = open_db_in_memory().unwrap();
        let kv = KvStore::new(&conn);

        kv.put_json("slot", &vec!["a".to_string()]).unwrap();
        kv.put_json("slot", &vec!["b".to_string()]).unwrap();

        let read: Vec<String> = kv.get_json("slot").unwrap().unwrap();
        assert_eq!(read, vec!["b".to_string()]);
    }

    #[test]
    fn corrupt_value_is_an_explicit_decode_error() {
        let conn = open_db_in_memory().unwrap();
        let kv = KvStore::new(&conn);

        conn.execute(
            "INSERT INTO kv (key, value) VALUES ('bad', 'not json at all');",
            [],
        )
        .unwrap();

        let err = kv.get_json::<Vec<String>>("bad").unwrap_err();
        assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "bad"));
    }

    #[test]
    fn delete_is_idempotent() {
        let conn = open_db_in_memory().unwrap();
        let kv = KvStore::new(&conn);

        kv.put_json("gone", &1_u64).unwrap();
        kv.delete("gone").unwrap();
        kv.delete("gone").unwrap();
        assert!(kv.get_raw("gone").unwrap().is_none());
    }
}
