//! Key-value namespace access.
//!
//! # Responsibility
//! - Provide typed JSON get/put/delete over the single `kv` table.
//! - Own key derivation for fixed and per-scope entries.
//!
//! # Invariants
//! - All persisted values are JSON text with a defined schema.
//! - Decode failures surface as [`StorageError::Decode`]; masking corrupt
//!   values as absence is a repository-layer decision, never implicit here.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keys;
mod kv;

pub use kv::KvStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for key-value reads and writes.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Persisted value exists but is not valid JSON for the expected schema.
    Decode { key: String, message: String },
    /// Value could not be serialized for persistence.
    Encode { key: String, message: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Decode { key, message } => {
                write!(f, "corrupt value under key `{key}`: {message}")
            }
            Self::Encode { key, message } => {
                write!(f, "cannot serialize value for key `{key}`: {message}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Decode { .. } | Self::Encode { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
