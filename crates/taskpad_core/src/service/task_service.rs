//! Task store: per-scope CRUD and filtering over an in-memory collection.
//!
//! # Responsibility
//! - Own the loaded task collection and next-id counter for one scope.
//! - Persist collection + counter on every mutation.
//!
//! # Invariants
//! - The scope is fixed at construction; operations never read ambient
//!   session state.
//! - Ids are assigned from the persisted counter, strictly increasing,
//!   never reused after removal.
//! - `list` and `filter` never mutate stored state.

use crate::model::task::Task;
use crate::repo::credential_repo::CredentialRepository;
use crate::repo::task_repo::TaskRepository;
use crate::storage::StorageError;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task store error taxonomy.
#[derive(Debug)]
pub enum TaskError {
    /// Construction was attempted with no active session to scope by.
    Unauthenticated,
    /// Persistence-layer failure.
    Storage(StorageError),
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "no active session"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unauthenticated => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for TaskError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Task store for one owner scope.
///
/// Holds the collection in memory between operations; every mutation writes
/// the whole collection and the counter back, matching the original
/// whole-array persistence shape. Two stores over the same scope on separate
/// connections can clobber each other's last write; accepted single-writer
/// model, not defended against.
#[derive(Debug)]
pub struct TaskService<R: TaskRepository> {
    repo: R,
    scope: String,
    tasks: Vec<Task>,
    next_id: u64,
}

impl<R: TaskRepository> TaskService<R> {
    /// Loads the collection and counter for an explicit scope.
    ///
    /// Missing or corrupt persisted state initializes to an empty collection
    /// with counter 1.
    pub fn load(repo: R, scope: impl Into<String>) -> Result<Self, TaskError> {
        let scope = scope.into();
        let tasks = repo.read_tasks(&scope)?;
        let next_id = repo.read_counter(&scope)?;
        debug!(
            "event=tasks_load module=tasks status=ok count={} next_id={next_id}",
            tasks.len()
        );
        Ok(Self {
            repo,
            scope,
            tasks,
            next_id,
        })
    }

    /// Loads the store scoped to the active session.
    ///
    /// The session is resolved once, here; the constructed store never
    /// re-reads it. Fails with [`TaskError::Unauthenticated`] when no
    /// session is active.
    pub fn for_current_session<C: CredentialRepository>(
        credentials: &C,
        repo: R,
    ) -> Result<Self, TaskError> {
        let session = credentials
            .read_session()?
            .ok_or(TaskError::Unauthenticated)?;
        Self::load(repo, session.email)
    }

    /// The owner scope this store was constructed with.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Appends a new task and returns it.
    ///
    /// The id comes from the persisted counter; insertion order is display
    /// order, newest last.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Task, TaskError> {
        let task = Task::new(self.next_id, text, date);
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.persist()?;
        info!(
            "event=task_add module=tasks status=ok id={} count={}",
            task.id,
            self.tasks.len()
        );
        Ok(task)
    }

    /// Removes the task with `id` if present; silent no-op when absent.
    ///
    /// The counter is never decremented, so removed ids are not reassigned.
    pub fn remove(&mut self, id: u64) -> Result<(), TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_remove module=tasks status=absent id={id}");
            return Ok(());
        }
        self.persist()?;
        info!(
            "event=task_remove module=tasks status=ok id={id} count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Full collection in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Case-insensitive substring filter over task text.
    ///
    /// The query is trimmed first; a blank query returns the full collection
    /// in original order. Pure with respect to stored state.
    pub fn filter(&self, query: &str) -> Vec<&Task> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tasks.iter().collect();
        }
        self.tasks
            .iter()
            .filter(|task| task.text.to_lowercase().contains(&needle))
            .collect()
    }

    fn persist(&self) -> Result<(), TaskError> {
        self.repo.write_tasks(&self.scope, &self.tasks)?;
        self.repo.write_counter(&self.scope, self.next_id)?;
        Ok(())
    }
}
