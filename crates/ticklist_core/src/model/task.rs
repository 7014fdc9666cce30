//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its partial-update form.
//! - Generate collision-free numeric ids and legacy-shaped date strings.
//!
//! # Invariants
//! - `id` is unique within a collection and never reused during a process.
//! - `completed_at` is `Some` exactly when `checked` is true; `apply`
//!   re-establishes this after every merge.
//! - `title` and `description` are non-empty for every validated task.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};

/// Stable numeric identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The persisted representation is a plain JSON number.
pub type TaskId = i64;

static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Issues a fresh task id.
///
/// Ids are epoch milliseconds, bumped past the previously issued id when two
/// creates land in the same clock tick. Monotonic per process.
pub fn next_task_id() -> TaskId {
    let now = Local::now().timestamp_millis();
    loop {
        let last = LAST_ISSUED_ID.load(Ordering::SeqCst);
        let candidate = if now > last { now } else { last + 1 };
        if LAST_ISSUED_ID
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
    }
}

/// Returns today's date in the legacy human-readable shape, e.g.
/// `Wed Aug 27 2026`.
pub fn today_date_string() -> String {
    Local::now().format("%a %b %d %Y").to_string()
}

/// Validation error for task field constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Serde field names match the persisted JSON layout exactly, so collections
/// written by the legacy front end load without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique numeric id, assigned once at creation.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Completion flag; the source of truth for row styling.
    pub checked: bool,
    /// Human-readable creation date, set once and immutable thereafter.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Serialized as `completedAt`, null while the task is open.
    #[serde(rename = "completedAt")]
    pub completed_at: Option<String>,
}

/// Partial update merged into an existing task by the registry.
///
/// `completed_at` uses a nested option: the outer level is "field present in
/// the patch", the inner level is the stored value (which may be null).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub checked: Option<bool>,
    pub completed_at: Option<Option<String>>,
}

impl TaskPatch {
    /// Patch flipping the completion flag, with the completion date filled
    /// or cleared to match.
    pub fn set_checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            completed_at: Some(checked.then(today_date_string)),
            ..Self::default()
        }
    }
}

impl Task {
    /// Creates a new unchecked task dated today.
    ///
    /// # Errors
    /// - Rejects an empty `title` or `description`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: next_task_id(),
            title: title.into(),
            description: description.into(),
            checked: false,
            created_at: today_date_string(),
            completed_at: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks field constraints without touching completion state.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.description.is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Merges a patch into this task field by field.
    ///
    /// After the merge the completion invariant is re-established: a checked
    /// task without a completion date gets today's, and an unchecked task
    /// has its date cleared.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(checked) = patch.checked {
            self.checked = checked;
        }
        if let Some(completed_at) = &patch.completed_at {
            self.completed_at = completed_at.clone();
        }

        if self.checked {
            if self.completed_at.is_none() {
                self.completed_at = Some(today_date_string());
            }
        } else {
            self.completed_at = None;
        }
    }
}
