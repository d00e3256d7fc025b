//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies so serde round-trips stay
//! lossless. Identifiers stay as strings on the client side.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, if the account was created through email auth.
    #[serde(default)]
    pub email: Option<String>,
}

/// A user-owned project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the owner pinned this project to the top of their lists.
    #[serde(default)]
    pub is_pinned: bool,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
}

/// A unit of work inside a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (UUID string).
    pub id: String,
    /// Parent project (UUID string).
    pub project_id: String,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub is_completed: bool,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
}

/// Body for `POST /api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

/// Body for `PUT /api/projects/{id}`; replaces every editable field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: Option<String>,
    pub is_pinned: bool,
}

impl From<&Project> for ProjectUpdate {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            is_pinned: project.is_pinned,
        }
    }
}

/// Body for `POST /api/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTask {
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Body for `PUT /api/tasks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            is_completed: task.is_completed,
        }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
