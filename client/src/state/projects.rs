//! Projects store: cached project list plus fetch/mutation actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<ProjectsState>` by `App`. Pages call the action
//! functions below; each one talks to `net::api` from the browser and folds
//! the result back into the signal. During SSR the actions are no-ops.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::net::types::{NewProject, Project, ProjectUpdate};
use crate::state::dashboard::pin_toggle_update;
use crate::state::fetch::{FetchOutcome, FetchTicket, FetchTracker};
use crate::state::tasks::TasksState;

/// Shared project list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetch: FetchTracker,
}

impl ProjectsState {
    #[must_use]
    pub fn find(&self, project_id: &str) -> Option<&Project> {
        self.items.iter().find(|p| p.id == project_id)
    }

    /// Replace a project in place, or insert it at the front when unknown.
    pub fn upsert(&mut self, project: Project) {
        self.fetch.record_mutation();
        if let Some(existing) = self.items.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            self.items.insert(0, project);
        }
    }

    pub fn remove(&mut self, project_id: &str) -> Option<Project> {
        let idx = self.items.iter().position(|p| p.id == project_id)?;
        self.fetch.record_mutation();
        Some(self.items.remove(idx))
    }

    /// Update body that flips a project's pin, or `None` for an unknown ID.
    #[must_use]
    pub fn pin_toggle(&self, project_id: &str, is_pinned: bool) -> Option<ProjectUpdate> {
        pin_toggle_update(&self.items, project_id, is_pinned).map(|p| ProjectUpdate::from(&p))
    }

    /// Mark a list request as in flight and return its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.fetch.begin()
    }

    /// Fold a list response into the store.
    ///
    /// Superseded responses change nothing. Stale successes keep the current
    /// items and leave `loading` set so the caller can fetch again.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Project>, String>) -> FetchOutcome {
        let outcome = self.fetch.classify(ticket);
        match (outcome, result) {
            (FetchOutcome::Superseded, _) | (FetchOutcome::Stale, Ok(_)) => return outcome,
            (_, Ok(items)) => {
                self.items = items;
                self.error = None;
            }
            (_, Err(e)) => self.error = Some(e),
        }
        self.loading = false;
        FetchOutcome::Apply
    }
}

/// Pinned projects first, otherwise keeping the incoming order.
#[must_use]
pub fn pinned_first(projects: &[Project]) -> Vec<Project> {
    let mut ordered = projects.to_vec();
    ordered.sort_by_key(|p| !p.is_pinned);
    ordered
}

/// Load the caller's projects into the store.
///
/// A response that raced a local mutation is discarded and requested again.
pub fn fetch_projects(store: RwSignal<ProjectsState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(ticket) = store.try_update(ProjectsState::begin_fetch) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_projects().await;
            if let Err(e) = &result {
                log::warn!("fetch projects failed: {e}");
            }
            if store.try_update(|s| s.apply_fetch(ticket, result)) == Some(FetchOutcome::Stale) {
                fetch_projects(store);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

/// Create a project and add the server's copy to the store.
pub fn create_project(store: RwSignal<ProjectsState>, body: NewProject) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::create_project(&body).await {
            Ok(project) => store.update(|s| {
                s.upsert(project);
                s.error = None;
            }),
            Err(e) => {
                log::warn!("create project failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, body);
    }
}

/// Replace a project's editable fields and apply the server's copy.
pub fn update_project(store: RwSignal<ProjectsState>, project_id: String, update: ProjectUpdate) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::update_project(&project_id, &update).await {
            Ok(project) => store.update(|s| {
                s.upsert(project);
                s.error = None;
            }),
            Err(e) => {
                log::warn!("update project {project_id} failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, project_id, update);
    }
}

/// Flip a project's pin from the state its card was rendered with.
pub fn toggle_pin(store: RwSignal<ProjectsState>, project_id: String, is_pinned: bool) {
    if let Some(update) = store.with_untracked(|s| s.pin_toggle(&project_id, is_pinned)) {
        update_project(store, project_id, update);
    }
}

/// Delete a project, dropping it and its tasks from both stores.
pub fn delete_project(store: RwSignal<ProjectsState>, tasks: RwSignal<TasksState>, project_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_project(&project_id).await {
            Ok(()) => {
                store.update(|s| {
                    s.remove(&project_id);
                });
                tasks.update(|s| s.remove_for_project(&project_id));
            }
            Err(e) => {
                log::warn!("delete project {project_id} failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, tasks, project_id);
    }
}
