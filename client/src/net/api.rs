//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! land in store `error` fields rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewProject, NewTask, Project, ProjectUpdate, Task, TaskUpdate, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
const PROJECTS_ENDPOINT: &str = "/api/projects";
#[cfg(any(test, feature = "hydrate"))]
const TASKS_ENDPOINT: &str = "/api/tasks";

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(project_id: &str) -> String {
    format!("{PROJECTS_ENDPOINT}/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("{TASKS_ENDPOINT}/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct RequestEmailCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("request code", resp.status()));
        }
        let body: RequestEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        unavailable()
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("verify code", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        unavailable()
    }
}

/// List the caller's projects via `GET /api/projects`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn list_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROJECTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("list projects", resp.status()));
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create a project via `POST /api/projects`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_project(body: &NewProject) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PROJECTS_ENDPOINT)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("create project", resp.status()));
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        unavailable()
    }
}

/// Replace a project's editable fields via `PUT /api/projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn update_project(project_id: &str, body: &ProjectUpdate) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&project_endpoint(project_id))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("update project", resp.status()));
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, body);
        unavailable()
    }
}

/// Delete a project via `DELETE /api/projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_project(project_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&project_endpoint(project_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("delete project", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        unavailable()
    }
}

/// List tasks across the caller's projects via `GET /api/tasks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn list_tasks() -> Result<Vec<Task>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TASKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("list tasks", resp.status()));
        }
        resp.json::<Vec<Task>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create a task via `POST /api/tasks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_task(body: &NewTask) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TASKS_ENDPOINT)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("create task", resp.status()));
        }
        resp.json::<Task>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        unavailable()
    }
}

/// Replace a task's editable fields via `PUT /api/tasks/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn update_task(task_id: &str, body: &TaskUpdate) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&task_endpoint(task_id))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("update task", resp.status()));
        }
        resp.json::<Task>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task_id, body);
        unavailable()
    }
}

/// Delete a task via `DELETE /api/tasks/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_task(task_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_endpoint(task_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("delete task", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        unavailable()
    }
}
