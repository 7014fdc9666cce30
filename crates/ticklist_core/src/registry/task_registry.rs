//! Task collection mutation operations.
//!
//! # Responsibility
//! - Provide the create/update/delete/check/reorder entry points front ends
//!   call on user gestures.
//! - Enforce the reload-mutate-write-through cycle around every mutation.
//!
//! # Invariants
//! - The store is authoritative: each operation starts from `store.load()`
//!   and ends with `store.save()`, discarding prior in-memory state.
//! - Lookup misses (update/delete/reorder of an absent id) silently no-op;
//!   the row may have been removed by an earlier handler in the session.

use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use crate::store::task_store::{StoreError, TaskStore};
use log::{debug, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error for task mutations.
#[derive(Debug)]
pub enum RegistryError {
    /// Rejected user input; surfaced to the user, nothing persisted.
    Validation(TaskValidationError),
    /// Persistence transport failure.
    Store(StoreError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for RegistryError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RegistryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Write-through task registry over a store implementation.
pub struct TaskRegistry<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current persisted collection.
    pub fn tasks(&self) -> RegistryResult<Vec<Task>> {
        Ok(self.store.load()?)
    }

    /// Creates a task and appends it to the collection.
    ///
    /// # Errors
    /// - `RegistryError::Validation` when `title` or `description` is empty;
    ///   nothing is persisted in that case.
    pub fn create(&self, title: &str, description: &str) -> RegistryResult<Task> {
        let task = Task::new(title, description)?;

        let mut tasks = self.store.load()?;
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        info!(
            "event=task_create module=registry status=ok id={} count={}",
            task.id,
            tasks.len()
        );
        Ok(task)
    }

    /// Merges `patch` into the task with the given id.
    ///
    /// A missing id is a no-op; the unchanged collection is still persisted
    /// (idempotent, so the unconditional save is harmless).
    pub fn update(&self, id: TaskId, patch: &TaskPatch) -> RegistryResult<()> {
        let mut tasks = self.store.load()?;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply(patch);
                debug!("event=task_update module=registry status=ok id={id}");
            }
            None => debug!("event=task_update module=registry status=miss id={id}"),
        }
        self.store.save(&tasks)?;
        Ok(())
    }

    /// Sets the completion flag, filling or clearing the completion date to
    /// match. The only sanctioned way to flip completion state.
    pub fn set_checked(&self, id: TaskId, checked: bool) -> RegistryResult<()> {
        self.update(id, &TaskPatch::set_checked(checked))
    }

    /// Removes the task with the given id. Idempotent.
    pub fn delete(&self, id: TaskId) -> RegistryResult<()> {
        let mut tasks = self.store.load()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        self.store.save(&tasks)?;

        info!(
            "event=task_delete module=registry status=ok id={id} removed={}",
            before - tasks.len()
        );
        Ok(())
    }

    /// Removes every checked task.
    pub fn delete_checked(&self) -> RegistryResult<()> {
        let mut tasks = self.store.load()?;
        let before = tasks.len();
        tasks.retain(|task| !task.checked);
        self.store.save(&tasks)?;

        info!(
            "event=task_delete_checked module=registry status=ok removed={}",
            before - tasks.len()
        );
        Ok(())
    }

    /// Replaces the collection with the empty sequence.
    pub fn delete_all(&self) -> RegistryResult<()> {
        self.store.save(&[])?;
        info!("event=task_delete_all module=registry status=ok");
        Ok(())
    }

    /// Rebuilds the collection in the given id order.
    ///
    /// Ids absent from the collection are silently dropped, as are tasks
    /// not named in `ids` and duplicate id mentions. Documented defensive
    /// behavior, mirroring the drop handler it serves.
    pub fn reorder(&self, ids: &[TaskId]) -> RegistryResult<()> {
        let tasks = self.store.load()?;
        let mut by_id: HashMap<TaskId, Task> =
            tasks.into_iter().map(|task| (task.id, task)).collect();
        let reordered: Vec<Task> = ids.iter().filter_map(|id| by_id.remove(id)).collect();
        self.store.save(&reordered)?;

        info!(
            "event=task_reorder module=registry status=ok count={}",
            reordered.len()
        );
        Ok(())
    }
}
