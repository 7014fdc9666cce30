//! Task registry use-case layer.
//!
//! # Responsibility
//! - Orchestrate store round-trips into named mutation operations.
//! - Keep front ends decoupled from storage details.
//!
//! # Invariants
//! - Every mutation reloads the collection before applying its change; no
//!   in-memory state survives across operations.

pub mod task_registry;
