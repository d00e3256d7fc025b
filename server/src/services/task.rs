//! Task persistence. Ownership flows through the parent project.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::project::{normalize_description, normalize_name};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(Uuid),
    #[error("project not found: {0}")]
    ProjectNotFound(Uuid),
    #[error("task title must be 1..=200 characters")]
    InvalidTitle,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Task row as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TaskRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Editable task fields; an update replaces all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

const TASK_COLUMNS: &str = "t.id, t.project_id, t.title, t.description, t.is_completed, \
     (EXTRACT(EPOCH FROM t.created_at) * 1000)::BIGINT AS created_at";

/// List tasks in the user's projects, optionally narrowed to one project.
pub async fn list_tasks(pool: &PgPool, user_id: Uuid, project_id: Option<Uuid>) -> Result<Vec<TaskRow>, TaskError> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        "SELECT {TASK_COLUMNS}
         FROM tasks t
         JOIN projects p ON p.id = t.project_id
         WHERE p.user_id = $1 AND ($2::UUID IS NULL OR t.project_id = $2)
         ORDER BY t.created_at ASC"
    ))
    .bind(user_id)
    .bind(project_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_task(
    pool: &PgPool,
    user_id: Uuid,
    project_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<TaskRow, TaskError> {
    let title = normalize_name(title).ok_or(TaskError::InvalidTitle)?;
    let row = sqlx::query_as::<_, TaskRow>(&format!(
        "WITH t AS (
             INSERT INTO tasks (project_id, title, description)
             SELECT p.id, $3, $4 FROM projects p WHERE p.id = $1 AND p.user_id = $2
             RETURNING *
         )
         SELECT {TASK_COLUMNS} FROM t"
    ))
    .bind(project_id)
    .bind(user_id)
    .bind(title)
    .bind(normalize_description(description))
    .fetch_optional(pool)
    .await?
    .ok_or(TaskError::ProjectNotFound(project_id))?;
    tracing::debug!(task_id = %row.id, %project_id, "task created");
    Ok(row)
}

pub async fn update_task(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
    changes: TaskChanges,
) -> Result<TaskRow, TaskError> {
    let title = normalize_name(&changes.title).ok_or(TaskError::InvalidTitle)?;
    sqlx::query_as::<_, TaskRow>(&format!(
        "WITH t AS (
             UPDATE tasks
             SET title = $3, description = $4, is_completed = $5, updated_at = now()
             FROM projects p
             WHERE tasks.id = $1 AND p.id = tasks.project_id AND p.user_id = $2
             RETURNING tasks.*
         )
         SELECT {TASK_COLUMNS} FROM t"
    ))
    .bind(task_id)
    .bind(user_id)
    .bind(title)
    .bind(normalize_description(changes.description.as_deref()))
    .bind(changes.is_completed)
    .fetch_optional(pool)
    .await?
    .ok_or(TaskError::NotFound(task_id))
}

pub async fn delete_task(pool: &PgPool, task_id: Uuid, user_id: Uuid) -> Result<(), TaskError> {
    let result = sqlx::query(
        "DELETE FROM tasks t USING projects p
         WHERE t.id = $1 AND p.id = t.project_id AND p.user_id = $2",
    )
    .bind(task_id)
    .bind(user_id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(TaskError::NotFound(task_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "task_test.rs"]
mod tests;
