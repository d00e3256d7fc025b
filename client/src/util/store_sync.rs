//! Keep the project and task stores in step with the logged-in user.
//!
//! Every authenticated page needs the same behavior: load both collections
//! once a user is known, and again whenever a different user logs in.

#[cfg(test)]
#[path = "store_sync_test.rs"]
mod store_sync_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::projects::{self, ProjectsState};
use crate::state::tasks::{self, TasksState};

/// The logged-in user's ID, used as the reload key for store fetches.
#[must_use]
pub fn fetch_key(auth: &AuthState) -> Option<String> {
    auth.user_id().map(ToOwned::to_owned)
}

/// Fetch projects and tasks on mount and on every change of user.
pub fn install_store_reload(
    auth: RwSignal<AuthState>,
    projects_store: RwSignal<ProjectsState>,
    tasks_store: RwSignal<TasksState>,
) {
    let user_key = Memo::new(move |_| auth.with(fetch_key));
    Effect::new(move || {
        if user_key.get().is_some() {
            projects::fetch_projects(projects_store);
            tasks::fetch_tasks(tasks_store);
        }
    });
}
