//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the canonical task record and its insert shape.
//! - Hold caller-side input validation for new tasks.
//!
//! # Invariants
//! - A persisted task is identified by a store-assigned integer `TaskId`.
//! - The store itself never validates content; validation happens in the
//!   service layer before insertion.

pub mod task;
