//! End-to-end flow over a file-backed store: the sequence a presentation
//! layer drives, with a snapshot re-fetch after every mutation.

use taskboard_core::db::open_db;
use taskboard_core::{SqliteTaskRepository, TaskService};

#[test]
fn add_toggle_delete_flow_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");

    let conn = open_db(&path).unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let milk_id = service.add_task("Buy milk", "Al").unwrap();
    let report_id = service.add_task("Write report", "Bo").unwrap();

    let tasks = service.tasks().unwrap();
    assert_eq!(tasks.len(), 2);

    let summary = service.assignee_summary().unwrap();
    assert_eq!(summary["Al"], 1);
    assert_eq!(summary["Bo"], 1);

    service.toggle_completed(milk_id).unwrap();

    let tasks = service.tasks().unwrap();
    let milk = tasks.iter().find(|task| task.id == milk_id).unwrap();
    let report = tasks.iter().find(|task| task.id == report_id).unwrap();
    assert!(milk.completed);
    assert_eq!(report.text, "Write report");
    assert!(!report.completed);

    service.delete_task(report_id).unwrap();

    let tasks = service.tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, milk_id);

    let summary = service.assignee_summary().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary["Al"], 1);
}

#[test]
fn tasks_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");

    let milk_id = {
        let conn = open_db(&path).unwrap();
        let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());
        let id = service.add_task("Buy milk", "Al").unwrap();
        service.toggle_completed(id).unwrap();
        id
    };

    let conn = open_db(&path).unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let tasks = service.tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, milk_id);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(tasks[0].completed);
    assert_eq!(service.assignee_summary().unwrap()["Al"], 1);
}
