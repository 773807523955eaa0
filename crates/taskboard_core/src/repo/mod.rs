//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the task store contract used by the service layer.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - The store does not validate task content; that is the caller's job.

pub mod task_repo;
