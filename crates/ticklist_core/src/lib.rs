//! Core domain logic for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod registry;
pub mod store;
pub mod view;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    next_task_id, today_date_string, Task, TaskId, TaskPatch, TaskValidationError,
};
pub use registry::task_registry::{RegistryError, RegistryResult, TaskRegistry};
pub use store::task_store::{
    MemoryTaskStore, SqliteTaskStore, StoreError, StoreResult, TaskStore, TASKS_KEY,
};
pub use view::render::{ReorderBinding, TaskRow, TaskView, CHECKED_MARKER};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
