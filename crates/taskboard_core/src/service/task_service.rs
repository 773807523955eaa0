//! Task use-case service.
//!
//! # Responsibility
//! - Provide the command/read API the presentation layer calls into.
//! - Normalize and validate user input before it reaches the store.
//! - Delegate persistence to the repository contract.
//!
//! # Invariants
//! - `add_task` trims input and rejects blank text or assignee.
//! - Mutations never patch an in-memory list; callers re-fetch the snapshot
//!   after every command.

use crate::model::task::{NewTask, Task, TaskId, TaskValidationError};
use crate::repo::task_repo::{StoreError, TaskRepository};
use crate::summary::summarize_by_assignee;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed caller-side validation; nothing was stored.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case service wrapper over the task store.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a task with the given description and assignee.
    ///
    /// # Contract
    /// - Both inputs are trimmed before validation.
    /// - `completed` starts as `false`.
    /// - Returns the store-assigned id.
    pub fn add_task(&self, text: &str, assignee: &str) -> ServiceResult<TaskId> {
        let draft = NewTask::new(text.trim(), assignee.trim());
        draft.validate()?;
        Ok(self.repo.insert(&draft)?)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Works from a fresh snapshot, so the write always replaces the current
    /// stored record. Returns the updated task, or `None` when no task has
    /// that id (nothing is written in that case).
    pub fn toggle_completed(&self, id: TaskId) -> ServiceResult<Option<Task>> {
        let snapshot = self.repo.list_all()?;
        let Some(mut task) = snapshot.into_iter().find(|task| task.id == id) else {
            return Ok(None);
        };

        task.toggle_completed();
        self.repo.update(&task)?;
        Ok(Some(task))
    }

    /// Deletes the task with the given id; absent ids are a no-op.
    pub fn delete_task(&self, id: TaskId) -> ServiceResult<()> {
        Ok(self.repo.delete_by_id(id)?)
    }

    /// Returns the current full task snapshot.
    pub fn tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repo.list_all()?)
    }

    /// Returns the assignee -> task-count summary from a fresh snapshot.
    pub fn assignee_summary(&self) -> ServiceResult<BTreeMap<String, usize>> {
        let tasks = self.repo.list_all()?;
        Ok(summarize_by_assignee(&tasks))
    }
}
