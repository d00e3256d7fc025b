//! Project persistence and ownership rules.
//!
//! Every query is scoped by `user_id`; a project owned by someone else is
//! reported as `NotFound` so IDs do not leak across accounts.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Longest accepted project name or task title, in characters.
pub const MAX_NAME_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("project name must be 1..=200 characters")]
    InvalidName,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Project row as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_pinned: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Editable project fields; an update replaces all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChanges {
    pub name: String,
    pub description: Option<String>,
    pub is_pinned: bool,
}

const PROJECT_COLUMNS: &str =
    "id, user_id, name, description, is_pinned, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT AS created_at";

/// Trim a required name; `None` when blank or too long.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return None;
    }
    Some(name.to_owned())
}

/// Trim optional free text; blank becomes `None`.
#[must_use]
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

/// List a user's projects, pinned first then newest first.
///
/// `projects.created_at` is qualified so ordering uses the timestamp column,
/// not the millisecond alias in the select list.
pub async fn list_projects(pool: &PgPool, user_id: Uuid) -> Result<Vec<ProjectRow>, ProjectError> {
    let rows = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = $1 ORDER BY is_pinned DESC, projects.created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<ProjectRow, ProjectError> {
    sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND user_id = $2"
    ))
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::NotFound(project_id))
}

pub async fn create_project(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<ProjectRow, ProjectError> {
    let name = normalize_name(name).ok_or(ProjectError::InvalidName)?;
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "INSERT INTO projects (user_id, name, description) VALUES ($1, $2, $3) RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(user_id)
    .bind(name)
    .bind(normalize_description(description))
    .fetch_one(pool)
    .await?;
    tracing::info!(project_id = %row.id, %user_id, "project created");
    Ok(row)
}

pub async fn update_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    changes: ProjectChanges,
) -> Result<ProjectRow, ProjectError> {
    let name = normalize_name(&changes.name).ok_or(ProjectError::InvalidName)?;
    sqlx::query_as::<_, ProjectRow>(&format!(
        "UPDATE projects
         SET name = $3, description = $4, is_pinned = $5, updated_at = now()
         WHERE id = $1 AND user_id = $2
         RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(project_id)
    .bind(user_id)
    .bind(name)
    .bind(normalize_description(changes.description.as_deref()))
    .bind(changes.is_pinned)
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::NotFound(project_id))
}

/// Delete a project; its tasks go with it through `ON DELETE CASCADE`.
pub async fn delete_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<(), ProjectError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ProjectError::NotFound(project_id));
    }
    tracing::info!(%project_id, %user_id, "project deleted");
    Ok(())
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
