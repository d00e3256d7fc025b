//! Project detail page: one project's tasks with add/complete/delete.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::project_card::{progress_percent, task_progress};
use crate::net::types::{NewTask, Task, TaskUpdate};
use crate::pages::projects::{optional_text, validate_name};
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;
use crate::state::tasks::{self, TasksState};
use crate::util::auth::install_unauth_redirect;
use crate::util::store_sync::install_store_reload;

fn build_new_task(project_id: &str, title: &str, description: &str) -> Result<NewTask, String> {
    Ok(NewTask {
        project_id: project_id.to_owned(),
        title: validate_name(title, "Task title")?,
        description: optional_text(description),
    })
}

/// Update body flipping a task's completion flag.
fn completion_toggle(task: &Task) -> TaskUpdate {
    TaskUpdate { is_completed: !task.is_completed, ..TaskUpdate::from(task) }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects_store = expect_context::<RwSignal<ProjectsState>>();
    let tasks_store = expect_context::<RwSignal<TasksState>>();
    let params = use_params_map();

    install_unauth_redirect(auth, use_navigate());

    let project_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    install_store_reload(auth, projects_store, tasks_store);

    let project = move || projects_store.with(|s| s.find(&project_id.get()).cloned());
    let project_tasks = move || tasks_store.with(|s| s.for_project(&project_id.get()));

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_new_task(&project_id.get_untracked(), &title.get(), &description.get()) {
            Ok(body) => {
                tasks::create_task(tasks_store, body);
                title.set(String::new());
                description.set(String::new());
                form_error.set(None);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="page project-page">
            <Show
                when=move || project().is_some()
                fallback=move || {
                    view! {
                        <p class="text-muted">
                            {move || {
                                if projects_store.with(|s| s.loading) {
                                    "Loading project..."
                                } else {
                                    "Project not found."
                                }
                            }}
                        </p>
                    }
                }
            >
                <div class="page__header">
                    <h1 class="page__title">{move || project().map(|p| p.name).unwrap_or_default()}</h1>
                    <a class="btn btn--outline" href="/projects">
                        "All Projects"
                    </a>
                </div>
                <p class="text-muted">{move || project().and_then(|p| p.description).unwrap_or_default()}</p>
                <p class="project-page__progress">
                    {move || {
                        let (done, total) = task_progress(&project_tasks());
                        format!("{done}/{total} tasks done ({}%)", progress_percent(done, total))
                    }}
                </p>

                <form class="card create-form" on:submit=on_add>
                    <input
                        class="input"
                        type="text"
                        placeholder="Task title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="text"
                        placeholder="Details (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Add Task"
                    </button>
                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                </form>

                <ul class="task-list">
                    {move || {
                        project_tasks()
                            .into_iter()
                            .map(|task| {
                                let toggle_body = completion_toggle(&task);
                                let toggle_id = task.id.clone();
                                let delete_id = task.id.clone();
                                view! {
                                    <li class="task-list__item" class:task-list__item--done=task.is_completed>
                                        <label class="task-list__label">
                                            <input
                                                type="checkbox"
                                                prop:checked=task.is_completed
                                                on:change=move |_| {
                                                    tasks::update_task(tasks_store, toggle_id.clone(), toggle_body.clone());
                                                }
                                            />
                                            <span class="task-list__title">{task.title}</span>
                                        </label>
                                        <span class="task-list__description">{task.description.unwrap_or_default()}</span>
                                        <button
                                            class="btn btn--ghost"
                                            title="Delete task"
                                            on:click=move |_| tasks::delete_task(tasks_store, delete_id.clone())
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
