//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and the insert-time draft shape.
//! - Provide input validation for draft tasks.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - `completed` is the only field mutated after creation, aside from
//!   full-record replacement via update.
//! - `text` and `assignee` are non-empty at creation time; enforcement lives
//!   in [`NewTask::validate`], not in the store.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for a persisted task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// A task as stored: description, responsible person, completion flag.
///
/// Serialized field names match the persisted record layout
/// `{id, text, assignee, completed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned unique id, monotonically increasing across inserts.
    pub id: TaskId,
    /// Task description.
    pub text: String,
    /// Name of the person responsible; used as the summary grouping key.
    pub assignee: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
}

impl Task {
    /// Flips the completion flag in place.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Insert shape for a task that has no id yet.
///
/// The store assigns the id on insert; callers never supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub text: String,
    pub assignee: String,
    pub completed: bool,
}

impl NewTask {
    /// Creates a draft task with `completed = false`.
    pub fn new(text: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            assignee: assignee.into(),
            completed: false,
        }
    }

    /// Checks the non-empty invariants for `text` and `assignee`.
    ///
    /// Blank-only strings count as empty. No trimming is performed here;
    /// normalization is the caller's job.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if self.assignee.trim().is_empty() {
            return Err(TaskValidationError::EmptyAssignee);
        }
        Ok(())
    }
}

/// Validation failure for draft task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyText,
    EmptyAssignee,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::EmptyAssignee => write!(f, "task assignee must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}
