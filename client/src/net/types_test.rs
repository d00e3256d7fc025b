use super::*;

fn make_project() -> Project {
    Project {
        id: "p-1".to_owned(),
        user_id: "u-1".to_owned(),
        name: "Launch".to_owned(),
        description: Some("Ship it".to_owned()),
        is_pinned: true,
        created_at: 1_700_000_000_000,
    }
}

// =============================================================
// Project / Task deserialization
// =============================================================

#[test]
fn project_deserializes_server_payload() {
    let json = serde_json::json!({
        "id": "p-1",
        "user_id": "u-1",
        "name": "Launch",
        "description": "Ship it",
        "is_pinned": true,
        "created_at": 1_700_000_000_000_i64
    });
    let project: Project = serde_json::from_value(json).unwrap();
    assert_eq!(project, make_project());
}

#[test]
fn project_missing_optional_fields_use_defaults() {
    let json = serde_json::json!({ "id": "p-2", "user_id": "u-1", "name": "Bare" });
    let project: Project = serde_json::from_value(json).unwrap();
    assert!(project.description.is_none());
    assert!(!project.is_pinned);
    assert_eq!(project.created_at, 0);
}

#[test]
fn project_created_at_accepts_integral_float() {
    let json = serde_json::json!({ "id": "p", "user_id": "u", "name": "n", "created_at": 42.0 });
    let project: Project = serde_json::from_value(json).unwrap();
    assert_eq!(project.created_at, 42);
}

#[test]
fn project_created_at_rejects_fractional_float() {
    let json = serde_json::json!({ "id": "p", "user_id": "u", "name": "n", "created_at": 42.5 });
    assert!(serde_json::from_value::<Project>(json).is_err());
}

#[test]
fn task_deserializes_with_completion_flag() {
    let json = serde_json::json!({
        "id": "t-1",
        "project_id": "p-1",
        "title": "Write docs",
        "is_completed": true
    });
    let task: Task = serde_json::from_value(json).unwrap();
    assert_eq!(task.project_id, "p-1");
    assert!(task.is_completed);
    assert!(task.description.is_none());
}

#[test]
fn user_email_is_optional() {
    let json = serde_json::json!({ "id": "u-1", "name": "Alice" });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.name, "Alice");
    assert!(user.email.is_none());
}

// =============================================================
// Update bodies
// =============================================================

#[test]
fn project_update_copies_every_editable_field() {
    let update = ProjectUpdate::from(&make_project());
    assert_eq!(update.name, "Launch");
    assert_eq!(update.description.as_deref(), Some("Ship it"));
    assert!(update.is_pinned);
}

#[test]
fn project_update_serializes_without_ids() {
    let value = serde_json::to_value(ProjectUpdate::from(&make_project())).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Launch", "description": "Ship it", "is_pinned": true })
    );
}

#[test]
fn task_update_copies_completion() {
    let task = Task {
        id: "t".to_owned(),
        project_id: "p".to_owned(),
        title: "Title".to_owned(),
        description: None,
        is_completed: true,
        created_at: 0,
    };
    let update = TaskUpdate::from(&task);
    assert_eq!(update.title, "Title");
    assert!(update.is_completed);
}
