//! Domain model for the persisted task collection.
//!
//! # Responsibility
//! - Define the canonical task record shared by storage, registry and view.
//! - Keep id generation and date formatting in one place.
//!
//! # Invariants
//! - Every task is identified by a unique numeric `TaskId`.
//! - `completed_at` is set if and only if `checked` is true.

pub mod task;
