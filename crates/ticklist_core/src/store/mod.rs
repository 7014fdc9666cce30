//! Persistence boundary for the task collection.
//!
//! # Responsibility
//! - Define the single-key load/save contract the registry writes through.
//! - Isolate SQLite and JSON codec details from business orchestration.
//!
//! # Invariants
//! - The whole collection lives under one key; saves overwrite it entirely.
//! - A missing or unparseable stored value loads as the empty collection,
//!   never as an error.

pub mod task_store;
