//! Dashboard view model derived from the auth, projects, and tasks stores.
//!
//! DESIGN
//! ======
//! The dashboard never trusts that stores only hold the caller's data: it
//! filters projects by owner, keeps tasks whose parent is one of those
//! projects, joins them, and caps the visible list. Everything here is pure
//! so the page can recompute it inside a reactive closure.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use crate::net::types::{Project, Task, User};

/// Maximum number of projects listed on the dashboard.
pub const DASHBOARD_PROJECT_LIMIT: usize = 6;

/// A project together with its tasks.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectWithTasks {
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// Attach to each project the tasks whose `project_id` matches it.
///
/// Project order and per-project task order follow the inputs.
#[must_use]
pub fn join_tasks(projects: &[Project], tasks: &[Task]) -> Vec<ProjectWithTasks> {
    projects
        .iter()
        .map(|project| ProjectWithTasks {
            project: project.clone(),
            tasks: tasks
                .iter()
                .filter(|t| t.project_id == project.id)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Counts and the capped project list shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub recent: Vec<ProjectWithTasks>,
}

impl DashboardSummary {
    /// Aggregate store contents for `user`. No user yields an empty summary.
    #[must_use]
    pub fn build(user: Option<&User>, projects: &[Project], tasks: &[Task]) -> Self {
        let Some(user) = user else {
            return Self::default();
        };

        let user_projects: Vec<Project> = projects
            .iter()
            .filter(|p| p.user_id == user.id)
            .cloned()
            .collect();
        let project_ids: HashSet<&str> = user_projects.iter().map(|p| p.id.as_str()).collect();
        let user_tasks: Vec<Task> = tasks
            .iter()
            .filter(|t| project_ids.contains(t.project_id.as_str()))
            .cloned()
            .collect();

        let mut recent = join_tasks(&user_projects, &user_tasks);
        recent.truncate(DASHBOARD_PROJECT_LIMIT);

        Self {
            total_projects: user_projects.len(),
            total_tasks: user_tasks.len(),
            completed_tasks: user_tasks.iter().filter(|t| t.is_completed).count(),
            recent,
        }
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_projects > DASHBOARD_PROJECT_LIMIT
    }

    /// Notice shown above the list when some projects are hidden.
    #[must_use]
    pub fn overflow_notice(&self) -> Option<String> {
        self.is_truncated().then(|| {
            format!(
                "Showing {DASHBOARD_PROJECT_LIMIT} of {} projects. View all projects for the complete list.",
                self.total_projects
            )
        })
    }
}

/// Build the full replacement sent when a pin button is pressed.
///
/// `is_pinned` is the state the button was rendered with; the result carries
/// its negation. Lookup spans every cached project, not only the caller's.
#[must_use]
pub fn pin_toggle_update(projects: &[Project], project_id: &str, is_pinned: bool) -> Option<Project> {
    projects.iter().find(|p| p.id == project_id).map(|p| Project {
        is_pinned: !is_pinned,
        ..p.clone()
    })
}

/// Error line for the dashboard: a failed project load wins over tasks.
#[must_use]
pub fn load_error(projects_error: Option<&str>, tasks_error: Option<&str>) -> Option<String> {
    projects_error.or(tasks_error).map(ToOwned::to_owned)
}
