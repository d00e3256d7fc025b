use super::*;

#[test]
fn build_new_task_targets_project_and_trims_title() {
    let body = build_new_task("p-1", "  Write tests ", " soon ").unwrap();
    assert_eq!(body.project_id, "p-1");
    assert_eq!(body.title, "Write tests");
    assert_eq!(body.description.as_deref(), Some("soon"));
}

#[test]
fn build_new_task_requires_title() {
    assert_eq!(build_new_task("p-1", "  ", "").unwrap_err(), "Task title is required.");
}

#[test]
fn completion_toggle_flips_flag_and_keeps_text() {
    let task = Task {
        id: "t-1".to_owned(),
        project_id: "p-1".to_owned(),
        title: "Write tests".to_owned(),
        description: Some("soon".to_owned()),
        is_completed: false,
        created_at: 0,
    };
    let update = completion_toggle(&task);
    assert!(update.is_completed);
    assert_eq!(update.title, "Write tests");
    assert_eq!(update.description.as_deref(), Some("soon"));
}
