//! View projection of the task collection.
//!
//! # Responsibility
//! - Project the persisted collection into render-ready rows.
//! - Own the drag-reorder binding lifecycle across render cycles.
//!
//! # Invariants
//! - Rows are rebuilt from the store on every render; no stale projection
//!   outlives a mutation.
//! - At most one reorder binding is live at a time; the previous one is
//!   released before a new one is acquired.

pub mod render;
