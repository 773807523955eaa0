use taskboard_core::db::open_db_in_memory;
use taskboard_core::{ServiceError, SqliteTaskRepository, TaskService, TaskValidationError};

#[test]
fn add_task_trims_input_and_stores_it_uncompleted() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let id = service.add_task("  Buy milk ", " Al ").unwrap();

    let tasks = service.tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].text, "Buy milk");
    assert_eq!(tasks[0].assignee, "Al");
    assert!(!tasks[0].completed);
}

#[test]
fn add_task_rejects_blank_input_without_storing() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let err = service.add_task("   ", "Al").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(TaskValidationError::EmptyText)
    ));

    let err = service.add_task("Buy milk", "  ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(TaskValidationError::EmptyAssignee)
    ));

    assert!(service.tasks().unwrap().is_empty());
}

#[test]
fn toggle_completed_flips_and_returns_the_updated_task() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let id = service.add_task("Buy milk", "Al").unwrap();

    let toggled = service.toggle_completed(id).unwrap().unwrap();
    assert_eq!(toggled.id, id);
    assert!(toggled.completed);

    let stored = service.tasks().unwrap();
    assert!(stored[0].completed);

    let toggled_back = service.toggle_completed(id).unwrap().unwrap();
    assert!(!toggled_back.completed);
    assert!(!service.tasks().unwrap()[0].completed);
}

#[test]
fn toggle_completed_with_absent_id_returns_none_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    service.add_task("Buy milk", "Al").unwrap();

    assert!(service.toggle_completed(999).unwrap().is_none());
    assert_eq!(service.tasks().unwrap().len(), 1);
}

#[test]
fn delete_task_removes_the_record_and_tolerates_absent_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let id = service.add_task("Buy milk", "Al").unwrap();

    service.delete_task(id).unwrap();
    assert!(service.tasks().unwrap().is_empty());

    service.delete_task(id).unwrap();
    assert!(service.tasks().unwrap().is_empty());
}

#[test]
fn assignee_summary_reflects_the_current_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    assert!(service.assignee_summary().unwrap().is_empty());

    service.add_task("Buy milk", "Al").unwrap();
    service.add_task("Write report", "Bo").unwrap();
    let third = service.add_task("Book flights", "Al").unwrap();

    let summary = service.assignee_summary().unwrap();
    assert_eq!(summary["Al"], 2);
    assert_eq!(summary["Bo"], 1);

    service.delete_task(third).unwrap();

    let summary = service.assignee_summary().unwrap();
    assert_eq!(summary["Al"], 1);
    assert_eq!(summary["Bo"], 1);
}
