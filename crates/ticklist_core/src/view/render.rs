//! Row projection and render/reorder cycle.
//!
//! # Responsibility
//! - Build one `TaskRow` per task in collection order.
//! - Route user gestures (create, toggle, delete, drop) through the
//!   registry and re-render where the contract demands it.
//!
//! # Invariants
//! - `render_all` releases the previous reorder binding before acquiring a
//!   fresh one, so repeated renders never accumulate duplicate handlers.
//! - `complete_drop` persists the new order but does not re-render; the
//!   rows are already on screen in that order.

use crate::model::task::{Task, TaskId};
use crate::registry::task_registry::{RegistryResult, TaskRegistry};
use crate::store::task_store::TaskStore;
use log::debug;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Marker class carried by completed rows; front ends key strike-through
/// and muted styling off it.
pub const CHECKED_MARKER: &str = "checked";

/// Render-ready projection of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub checked: bool,
    pub created_label: String,
    /// `None` while the task is open.
    pub completed_label: Option<String>,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            checked: task.checked,
            created_label: format!("Created at: {}", task.created_at),
            completed_label: task
                .completed_at
                .as_deref()
                .map(|date| format!("Completed at: {date}")),
        }
    }

    /// Marker class for this row, present only when completed.
    pub fn marker_class(&self) -> Option<&'static str> {
        self.checked.then_some(CHECKED_MARKER)
    }
}

static NEXT_BINDING_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Guard owning the drag-reorder wiring for one rendered generation.
///
/// Dropping the guard stands in for destroying the underlying widget
/// binding; a new guard must not be acquired while an old one is live for
/// the same view.
#[derive(Debug)]
pub struct ReorderBinding {
    generation: u64,
}

impl ReorderBinding {
    fn acquire() -> Self {
        let generation = NEXT_BINDING_GENERATION.fetch_add(1, Ordering::Relaxed);
        debug!("event=reorder_bind module=view status=ok generation={generation}");
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ReorderBinding {
    fn drop(&mut self) {
        debug!(
            "event=reorder_unbind module=view status=ok generation={}",
            self.generation
        );
    }
}

/// Stateful view over a registry: rendered rows plus the live reorder
/// binding.
pub struct TaskView<S: TaskStore> {
    registry: TaskRegistry<S>,
    rows: Vec<TaskRow>,
    binding: Option<ReorderBinding>,
}

impl<S: TaskStore> TaskView<S> {
    pub fn new(registry: TaskRegistry<S>) -> Self {
        Self {
            registry,
            rows: Vec::new(),
            binding: None,
        }
    }

    pub fn registry(&self) -> &TaskRegistry<S> {
        &self.registry
    }

    /// Rows in current render order.
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    /// Generation of the live reorder binding, if any. Exposed for tests
    /// and diagnostics.
    pub fn binding_generation(&self) -> Option<u64> {
        self.binding.as_ref().map(ReorderBinding::generation)
    }

    /// Clears the view, reloads the collection from the store and rebuilds
    /// one row per task in collection order.
    ///
    /// The previous reorder binding is released before rows are rebuilt and
    /// a fresh binding is acquired after.
    pub fn render_all(&mut self) -> RegistryResult<()> {
        drop(self.binding.take());
        self.rows.clear();

        let tasks = self.registry.tasks()?;
        self.rows = tasks.iter().map(TaskRow::from_task).collect();

        self.binding = Some(ReorderBinding::acquire());
        debug!(
            "event=render_all module=view status=ok rows={}",
            self.rows.len()
        );
        Ok(())
    }

    /// Form-submission handler: create then re-render.
    ///
    /// Validation failures propagate for the front end to show; the view is
    /// left untouched in that case.
    pub fn create_task(&mut self, title: &str, description: &str) -> RegistryResult<()> {
        self.registry.create(title, description)?;
        self.render_all()
    }

    /// Checkbox handler: flip completion then re-render.
    pub fn toggle_checked(&mut self, id: TaskId, checked: bool) -> RegistryResult<()> {
        self.registry.set_checked(id, checked)?;
        self.render_all()
    }

    /// Delete-glyph handler: remove one task then re-render.
    pub fn delete_task(&mut self, id: TaskId) -> RegistryResult<()> {
        self.registry.delete(id)?;
        self.render_all()
    }

    /// Delete-key handler: remove every checked task then re-render.
    pub fn delete_checked(&mut self) -> RegistryResult<()> {
        self.registry.delete_checked()?;
        self.render_all()
    }

    /// Clear-all handler: empty the collection then re-render.
    pub fn delete_all(&mut self) -> RegistryResult<()> {
        self.registry.delete_all()?;
        self.render_all()
    }

    /// Drop handler: persist the on-screen id order and resequence the
    /// existing rows in place.
    ///
    /// Ids no longer present are dropped from both the persisted collection
    /// and the rows. No full re-render happens here; the screen already
    /// shows the new order.
    pub fn complete_drop(&mut self, visual_ids: &[TaskId]) -> RegistryResult<()> {
        self.registry.reorder(visual_ids)?;

        let mut by_id: HashMap<TaskId, TaskRow> = self
            .rows
            .drain(..)
            .map(|row| (row.id, row))
            .collect();
        self.rows = visual_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        Ok(())
    }
}
