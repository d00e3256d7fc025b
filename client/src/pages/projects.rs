//! Projects page: every project the user owns, with create/pin/delete.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::project_list::ProjectList;
use crate::net::types::NewProject;
use crate::state::auth::AuthState;
use crate::state::dashboard::join_tasks;
use crate::state::projects::{self, ProjectsState, pinned_first};
use crate::state::tasks::TasksState;
use crate::util::auth::install_unauth_redirect;
use crate::util::store_sync::{fetch_key, install_store_reload};

/// Longest accepted project name or task title, in characters.
pub(crate) const MAX_NAME_CHARS: usize = 200;

/// Trim and bound a required name field.
pub(crate) fn validate_name(raw: &str, field: &'static str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(format!("{field} is required."));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(format!("{field} must be at most {MAX_NAME_CHARS} characters."));
    }
    Ok(name.to_owned())
}

/// Empty or whitespace-only descriptions are sent as `None`.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn build_new_project(name: &str, description: &str) -> Result<NewProject, String> {
    Ok(NewProject { name: validate_name(name, "Project name")?, description: optional_text(description) })
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects_store = expect_context::<RwSignal<ProjectsState>>();
    let tasks_store = expect_context::<RwSignal<TasksState>>();

    install_unauth_redirect(auth, use_navigate());

    install_store_reload(auth, projects_store, tasks_store);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_new_project(&name.get(), &description.get()) {
            Ok(body) => {
                projects::create_project(projects_store, body);
                name.set(String::new());
                description.set(String::new());
                form_error.set(None);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let on_toggle_pin = Callback::new(move |(project_id, is_pinned): (String, bool)| {
        projects::toggle_pin(projects_store, project_id, is_pinned);
    });
    let on_delete = Callback::new(move |project_id: String| {
        projects::delete_project(projects_store, tasks_store, project_id);
    });

    let entries = move || {
        let owner = auth.with(fetch_key);
        let owned = projects_store.with(|s| {
            s.items
                .iter()
                .filter(|p| Some(p.user_id.as_str()) == owner.as_deref())
                .cloned()
                .collect::<Vec<_>>()
        });
        tasks_store.with(|t| join_tasks(&pinned_first(&owned), &t.items))
    };

    view! {
        <div class="page projects-page">
            <div class="page__header">
                <h1 class="page__title">"Projects"</h1>
            </div>

            <form class="card create-form" on:submit=on_create>
                <h2 class="card__title">"New Project"</h2>
                <input
                    class="input"
                    type="text"
                    placeholder="Project name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Create Project"
                </button>
                <Show when=move || form_error.get().is_some()>
                    <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
            </form>

            <Show when=move || projects_store.with(|s| s.error.is_some())>
                <p class="form-error">{move || projects_store.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !projects_store.with(|s| s.loading)
                fallback=|| {
                    view! {
                        <div class="loading">
                            <div class="spinner" aria-hidden="true"></div>
                            <p>"Loading your projects..."</p>
                        </div>
                    }
                }
            >
                {move || {
                    view! { <ProjectList projects=entries() on_toggle_pin=on_toggle_pin on_delete=on_delete/> }
                }}
            </Show>
        </div>
    }
}
