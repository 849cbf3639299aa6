//! Task persistence: per-scope collection and id counter.
//!
//! # Responsibility
//! - Read/write the task array under `tareas_<scope>`.
//! - Read/write the next-id counter under `contadorId_<scope>`.
//!
//! # Invariants
//! - Missing or corrupt values initialize to the documented empty state:
//!   empty collection, counter = 1.
//! - The counter only ever moves forward; removal never rewinds it.

use crate::model::task::Task;
use crate::storage::{keys, KvStore, StorageError, StorageResult};
use log::warn;
use rusqlite::Connection;

/// First id assigned in a fresh scope.
pub const INITIAL_TASK_ID: u64 = 1;

/// Persistence contract for the task store.
pub trait TaskRepository {
    /// Returns the task collection for `scope` in insertion order.
    fn read_tasks(&self, scope: &str) -> StorageResult<Vec<Task>>;
    /// Replaces the persisted collection for `scope`.
    fn write_tasks(&self, scope: &str, tasks: &[Task]) -> StorageResult<()>;
    /// Returns the next id to assign for `scope`.
    fn read_counter(&self, scope: &str) -> StorageResult<u64>;
    /// Persists the next id to assign for `scope`.
    fn write_counter(&self, scope: &str, next_id: u64) -> StorageResult<()>;
}

/// Key-value-backed task repository.
#[derive(Debug)]
pub struct KvTaskRepository<'conn> {
    kv: KvStore<'conn>,
}

impl<'conn> KvTaskRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            kv: KvStore::new(conn),
        }
    }
}

impl TaskRepository for KvTaskRepository<'_> {
    fn read_tasks(&self, scope: &str) -> StorageResult<Vec<Task>> {
        let key = keys::tasks(scope);
        match self.kv.get_json::<Vec<Task>>(&key) {
            Ok(tasks) => Ok(tasks.unwrap_or_default()),
            Err(StorageError::Decode { key, message }) => {
                warn!("event=tasks_read module=repo status=corrupt key={key} error={message}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn write_tasks(&self, scope: &str, tasks: &[Task]) -> StorageResult<()> {
        self.kv.put_json(&keys::tasks(scope), &tasks)
    }

    fn read_counter(&self, scope: &str) -> StorageResult<u64> {
        let key = keys::task_counter(scope);
        match self.kv.get_json::<u64>(&key) {
            Ok(counter) => Ok(counter.unwrap_or(INITIAL_TASK_ID)),
            Err(StorageError::Decode { key, message }) => {
                warn!("event=counter_read module=repo status=corrupt key={key} error={message}");
                Ok(INITIAL_TASK_ID)
            }
            Err(err) => Err(err),
        }
    }

    fn write_counter(&self, scope: &str, next_id: u64) -> StorageResult<()> {
        self.kv.put_json(&keys::task_counter(scope), &next_id)
    }
}
