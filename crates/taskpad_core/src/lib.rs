//! Core domain logic for taskpad: per-user task lists behind a
//! credential/session gate, persisted in a single key-value namespace.
//! This crate is the single source of truth for business invariants; the
//! collaborator UI layer calls in through the service facades and nothing
//! else.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::Task;
pub use model::user::User;
pub use repo::credential_repo::{CredentialRepository, KvCredentialRepository};
pub use repo::task_repo::{KvTaskRepository, TaskRepository};
pub use service::credential_service::{AuthError, CredentialService, ValidationError};
pub use service::task_service::{TaskError, TaskService};
pub use storage::{KvStore, StorageError, StorageResult};
pub use validate::{format_date, is_non_empty, is_valid_email_shape, is_valid_password_length};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
