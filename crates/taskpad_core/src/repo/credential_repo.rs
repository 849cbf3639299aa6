//! Credential persistence: user collection and the session slot.
//!
//! # Responsibility
//! - Read/append the registered-user array under the `users` key.
//! - Read/write/clear the single current-session slot.
//!
//! # Invariants
//! - The session slot holds a snapshot copy of the user record, not a
//!   reference into the collection.
//! - A corrupt `users` array reads as empty; a corrupt session slot reads as
//!   no session. Both paths emit a warn event.

use crate::model::user::User;
use crate::storage::{keys, KvStore, StorageError, StorageResult};
use log::warn;
use rusqlite::Connection;

/// Persistence contract for the credential store.
pub trait CredentialRepository {
    /// Returns all registered users in registration order.
    fn list_users(&self) -> StorageResult<Vec<User>>;
    /// Appends one user to the collection and persists it.
    fn append_user(&self, user: &User) -> StorageResult<()>;
    /// Reads the current-session slot.
    fn read_session(&self) -> StorageResult<Option<User>>;
    /// Writes a user snapshot into the session slot.
    fn write_session(&self, user: &User) -> StorageResult<()>;
    /// Clears the session slot; idempotent.
    fn clear_session(&self) -> StorageResult<()>;
}

/// Key-value-backed credential repository.
pub struct KvCredentialRepository<'conn> {
    kv: KvStore<'conn>,
}

impl<'conn> KvCredentialRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            kv: KvStore::new(conn),
        }
    }
}

impl CredentialRepository for KvCredentialRepository<'_> {
    fn list_users(&self) -> StorageResult<Vec<User>> {
        match self.kv.get_json::<Vec<User>>(keys::USERS) {
            Ok(users) => Ok(users.unwrap_or_default()),
            Err(StorageError::Decode { key, message }) => {
                warn!("event=users_read module=repo status=corrupt key={key} error={message}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn append_user(&self, user: &User) -> StorageResult<()> {
        let mut users = self.list_users()?;
        users.push(user.clone());
        self.kv.put_json(keys::USERS, &users)
    }

    fn read_session(&self) -> StorageResult<Option<User>> {
        match self.kv.get_json::<User>(keys::CURRENT_SESSION) {
            Ok(session) => Ok(session),
            Err(StorageError::Decode { key, message }) => {
                warn!("event=session_read module=repo status=corrupt key={key} error={message}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn write_session(&self, user: &User) -> StorageResult<()> {
        self.kv.put_json(keys::CURRENT_SESSION, user)
    }

    fn clear_session(&self) -> StorageResult<()> {
        self.kv.delete(keys::CURRENT_SESSION)
    }
}
