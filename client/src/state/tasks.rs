//! Tasks store: cached task list plus fetch/mutation actions.
//!
//! Mirrors `projects`; tasks reference their parent through `project_id`.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::net::types::{NewTask, Task, TaskUpdate};
use crate::state::fetch::{FetchOutcome, FetchTicket, FetchTracker};

/// Shared task list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetch: FetchTracker,
}

impl TasksState {
    #[must_use]
    pub fn find(&self, task_id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == task_id)
    }

    /// Tasks belonging to one project, in store order.
    #[must_use]
    pub fn for_project(&self, project_id: &str) -> Vec<Task> {
        self.items
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Replace a task in place, or append it when unknown.
    pub fn upsert(&mut self, task: Task) {
        self.fetch.record_mutation();
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        } else {
            self.items.push(task);
        }
    }

    pub fn remove(&mut self, task_id: &str) -> Option<Task> {
        let idx = self.items.iter().position(|t| t.id == task_id)?;
        self.fetch.record_mutation();
        Some(self.items.remove(idx))
    }

    pub fn remove_for_project(&mut self, project_id: &str) {
        self.fetch.record_mutation();
        self.items.retain(|t| t.project_id != project_id);
    }

    /// Mark a list request as in flight and return its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.fetch.begin()
    }

    /// Fold a list response into the store; same rules as the projects store.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Task>, String>) -> FetchOutcome {
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

/// Load every task across the caller's projects into the store.
pub fn fetch_tasks(store: RwSignal<TasksState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(ticket) = store.try_update(TasksState::begin_fetch) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_tasks().await;
            if let Err(e) = &result {
                log::warn!("fetch tasks failed: {e}");
            }
            if store.try_update(|s| s.apply_fetch(ticket, result)) == Some(FetchOutcome::Stale) {
                fetch_tasks(store);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

pub fn create_task(store: RwSignal<TasksState>, body: NewTask) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::create_task(&body).await {
            Ok(task) => store.update(|s| {
                s.upsert(task);
                s.error = None;
            }),
            Err(e) => {
                log::warn!("create task failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, body);
    }
}

pub fn update_task(store: RwSignal<TasksState>, task_id: String, update: TaskUpdate) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::update_task(&task_id, &update).await {
            Ok(task) => store.update(|s| {
                s.upsert(task);
                s.error = None;
            }),
            Err(e) => {
                log::warn!("update task {task_id} failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, task_id, update);
    }
}

pub fn delete_task(store: RwSignal<TasksState>, task_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_task(&task_id).await {
            Ok(()) => store.update(|s| {
                s.remove(&task_id);
            }),
            Err(e) => {
                log::warn!("delete task {task_id} failed: {e}");
                store.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, task_id);
    }
}
