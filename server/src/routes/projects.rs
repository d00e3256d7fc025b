//! Project CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::project::{self, ProjectChanges, ProjectError, ProjectRow};
use crate::state::AppState;

pub(crate) fn project_error_to_status(err: ProjectError) -> StatusCode {
    match err {
        ProjectError::NotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::InvalidName => StatusCode::BAD_REQUEST,
        ProjectError::Database(e) => {
            tracing::error!(error = %e, "project query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProjectBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
}

impl From<UpdateProjectBody> for ProjectChanges {
    fn from(body: UpdateProjectBody) -> Self {
        Self { name: body.name, description: body.description, is_pinned: body.is_pinned }
    }
}

/// `GET /api/projects` — list the caller's projects.
pub async fn list_projects(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<ProjectRow>>, StatusCode> {
    let rows = project::list_projects(&state.pool, auth.user.id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/projects` — create a project.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProjectBody>,
) -> Result<(StatusCode, Json<ProjectRow>), StatusCode> {
    let row = project::create_project(&state.pool, auth.user.id, &body.name, body.description.as_deref())
        .await
        .map_err(project_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/projects/:id` — fetch one project.
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectRow>, StatusCode> {
    let row = project::get_project(&state.pool, project_id, auth.user.id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(row))
}

/// `PUT /api/projects/:id` — replace a project's editable fields.
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(body): Json<UpdateProjectBody>,
) -> Result<Json<ProjectRow>, StatusCode> {
    let row = project::update_project(&state.pool, project_id, auth.user.id, body.into())
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/projects/:id` — delete a project and its tasks.
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    project::delete_project(&state.pool, project_id, auth.user.id)
        .await
        .map_err(project_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
