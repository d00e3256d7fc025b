use super::*;

#[test]
fn task_row_serializes_wire_shape() {
    let row = TaskRow {
        id: Uuid::nil(),
        project_id: Uuid::nil(),
        title: "Write docs".to_owned(),
        description: Some("API section".to_owned()),
        is_completed: false,
        created_at: 5,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["project_id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(value["title"], "Write docs");
    assert_eq!(value["is_completed"], false);
    assert_eq!(value["created_at"], 5);
}

#[test]
fn task_columns_alias_created_at_as_millis() {
    assert!(TASK_COLUMNS.contains("* 1000)::BIGINT AS created_at"));
    assert!(TASK_COLUMNS.starts_with("t.id"));
}

#[test]
fn error_messages_name_the_missing_entity() {
    let id = Uuid::nil();
    assert_eq!(TaskError::NotFound(id).to_string(), format!("task not found: {id}"));
    assert_eq!(TaskError::ProjectNotFound(id).to_string(), format!("project not found: {id}"));
}

// =============================================================================
// Live database round trips
// =============================================================================

#[cfg(feature = "live-db-tests")]
use crate::services::project::{create_project, delete_project};
#[cfg(feature = "live-db-tests")]
use crate::state::test_helpers::{insert_user, integration_pool};

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn list_tasks_is_scoped_to_owner_and_filters_by_project() {
    let pool = integration_pool().await;
    let owner = insert_user(&pool, "owner").await;
    let stranger = insert_user(&pool, "stranger").await;
    let alpha = create_project(&pool, owner, "Alpha", None).await.expect("alpha");
    let beta = create_project(&pool, owner, "Beta", None).await.expect("beta");
    let foreign = create_project(&pool, stranger, "Foreign", None).await.expect("foreign");

    let a1 = create_task(&pool, owner, alpha.id, "a1", None).await.expect("a1");
    let b1 = create_task(&pool, owner, beta.id, "b1", None).await.expect("b1");
    create_task(&pool, stranger, foreign.id, "f1", None).await.expect("f1");

    let all: Vec<Uuid> = list_tasks(&pool, owner, None)
        .await
        .expect("list all")
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&a1.id) && all.contains(&b1.id));

    let only_alpha = list_tasks(&pool, owner, Some(alpha.id)).await.expect("list alpha");
    assert_eq!(only_alpha, vec![a1]);

    let foreign_filter = list_tasks(&pool, owner, Some(foreign.id)).await.expect("list foreign");
    assert!(foreign_filter.is_empty());
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn create_task_rejects_project_owned_by_someone_else() {
    let pool = integration_pool().await;
    let owner = insert_user(&pool, "owner").await;
    let stranger = insert_user(&pool, "stranger").await;
    let project = create_project(&pool, owner, "Alpha", None).await.expect("project");

    let result = create_task(&pool, stranger, project.id, "sneaky", None).await;
    assert!(matches!(result, Err(TaskError::ProjectNotFound(id)) if id == project.id));

    let missing = Uuid::new_v4();
    assert!(matches!(
        create_task(&pool, owner, missing, "orphan", None).await,
        Err(TaskError::ProjectNotFound(_))
    ));
    assert!(list_tasks(&pool, owner, None).await.expect("list").is_empty());
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn other_users_cannot_update_or_delete_tasks() {
    let pool = integration_pool().await;
    let owner = insert_user(&pool, "owner").await;
    let stranger = insert_user(&pool, "stranger").await;
    let project = create_project(&pool, owner, "Alpha", None).await.expect("project");
    let task = create_task(&pool, owner, project.id, "Write docs", None).await.expect("task");

    let changes = TaskChanges { title: "Hijacked".to_owned(), description: None, is_completed: true };
    assert!(matches!(
        update_task(&pool, task.id, stranger, changes).await,
        Err(TaskError::NotFound(_))
    ));
    assert!(matches!(delete_task(&pool, task.id, stranger).await, Err(TaskError::NotFound(_))));

    let listed = list_tasks(&pool, owner, Some(project.id)).await.expect("list");
    assert_eq!(listed, vec![task]);
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn task_update_and_delete_round_trip() {
    let pool = integration_pool().await;
    let owner = insert_user(&pool, "owner").await;
    let project = create_project(&pool, owner, "Alpha", None).await.expect("project");
    let task = create_task(&pool, owner, project.id, " Write docs ", Some(" API ")).await.expect("task");
    assert_eq!(task.title, "Write docs");
    assert_eq!(task.description.as_deref(), Some("API"));
    assert!(!task.is_completed);

    let done = update_task(
        &pool,
        task.id,
        owner,
        TaskChanges { title: "Write docs".to_owned(), description: None, is_completed: true },
    )
    .await
    .expect("update");
    assert!(done.is_completed);
    assert_eq!(done.description, None);
    assert_eq!(done.project_id, project.id);

    delete_task(&pool, task.id, owner).await.expect("delete");
    assert!(matches!(delete_task(&pool, task.id, owner).await, Err(TaskError::NotFound(_))));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn deleting_project_removes_its_tasks() {
    let pool = integration_pool().await;
    let owner = insert_user(&pool, "owner").await;
    let doomed = create_project(&pool, owner, "Doomed", None).await.expect("doomed");
    let kept = create_project(&pool, owner, "Kept", None).await.expect("kept");
    create_task(&pool, owner, doomed.id, "gone", None).await.expect("gone");
    let survivor = create_task(&pool, owner, kept.id, "stays", None).await.expect("stays");

    delete_project(&pool, doomed.id, owner).await.expect("delete project");

    let remaining = list_tasks(&pool, owner, None).await.expect("list");
    assert_eq!(remaining, vec![survivor]);
    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
        .bind(doomed.id)
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(orphans, 0);
}
