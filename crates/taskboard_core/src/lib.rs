//! Core domain logic for the Taskboard task list.
//!
//! Presentation layers call into [`TaskService`] for commands and reads;
//! everything below it (store, migrations, aggregation) stays inside this
//! crate. There is no server and no cross-process sharing; the store is a
//! local SQLite database owned by the running application.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{NewTask, Task, TaskId, TaskValidationError};
pub use repo::task_repo::{SqliteTaskRepository, StoreError, StoreResult, TaskRepository};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use summary::summarize_by_assignee;
