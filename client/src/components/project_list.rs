//! Grid of project cards with an empty state.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::dashboard::ProjectWithTasks;

/// Renders `projects` in the given order.
///
/// `on_toggle_pin` receives `(project_id, is_pinned)` where `is_pinned` is the
/// state the card was rendered with.
#[component]
pub fn ProjectList(
    projects: Vec<ProjectWithTasks>,
    on_toggle_pin: Callback<(String, bool)>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    if projects.is_empty() {
        return view! {
            <div class="project-list project-list--empty">
                <p class="text-muted">"No projects yet."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="project-list">
            {projects
                .into_iter()
                .map(|entry| {
                    view! {
                        <ProjectCard
                            project=entry.project
                            tasks=entry.tasks
                            on_toggle_pin=on_toggle_pin
                            on_delete=on_delete
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
