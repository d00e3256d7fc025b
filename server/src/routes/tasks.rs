//! Task CRUD routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::task::{self, TaskChanges, TaskError, TaskRow};
use crate::state::AppState;

pub(crate) fn task_error_to_status(err: TaskError) -> StatusCode {
    match err {
        TaskError::NotFound(_) | TaskError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
        TaskError::InvalidTitle => StatusCode::BAD_REQUEST,
        TaskError::Database(e) => {
            tracing::error!(error = %e, "task query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Deserialize)]
pub struct ListTasksQuery {
    pub project_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub project_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<UpdateTaskBody> for TaskChanges {
    fn from(body: UpdateTaskBody) -> Self {
        Self { title: body.title, description: body.description, is_completed: body.is_completed }
    }
}

/// `GET /api/tasks` — tasks across the caller's projects, optionally `?project_id=`.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskRow>>, StatusCode> {
    let rows = task::list_tasks(&state.pool, auth.user.id, query.project_id)
        .await
        .map_err(task_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/tasks` — create a task in one of the caller's projects.
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskRow>), StatusCode> {
    let row = task::create_task(&state.pool, auth.user.id, body.project_id, &body.title, body.description.as_deref())
        .await
        .map_err(task_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PUT /api/tasks/:id` — replace a task's editable fields.
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskRow>, StatusCode> {
    let row = task::update_task(&state.pool, task_id, auth.user.id, body.into())
        .await
        .map_err(task_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/tasks/:id` — delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    task::delete_task(&state.pool, task_id, auth.user.id)
        .await
        .map_err(task_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;
