//! Card component for one project and its task progress.
//!
//! DESIGN
//! ======
//! Shared by the dashboard and the projects page so pin and delete
//! affordances look the same everywhere. Only the title is a link; the
//! buttons sit beside it, never inside an anchor.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::{Project, Task};

/// Completed and total task counts.
#[must_use]
pub fn task_progress(tasks: &[Task]) -> (usize, usize) {
    (tasks.iter().filter(|t| t.is_completed).count(), tasks.len())
}

/// Whole-number completion percentage, rounded down. Zero tasks reads as 0%.
#[must_use]
pub fn progress_percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    done.min(total) * 100 / total
}

/// Route of the detail page for a project.
#[must_use]
pub fn project_href(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

/// Accessible label for the pin button given the current pin state.
#[must_use]
pub fn pin_label(is_pinned: bool) -> &'static str {
    if is_pinned { "Unpin project" } else { "Pin project" }
}

#[component]
pub fn ProjectCard(
    project: Project,
    tasks: Vec<Task>,
    on_toggle_pin: Callback<(String, bool)>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let href = project_href(&project.id);
    let (done, total) = task_progress(&tasks);
    let percent = progress_percent(done, total);
    let is_pinned = project.is_pinned;
    let pin_id = project.id.clone();
    let delete_id = project.id.clone();
    let pin_label = pin_label(is_pinned);

    view! {
        <div class="card project-card" class:project-card--pinned=is_pinned>
            <div class="card__header project-card__header">
                <h3 class="card__title">
                    <a class="project-card__link" href=href>
                        {project.name}
                    </a>
                </h3>
                <button
                    class="btn btn--ghost project-card__pin"
                    title=pin_label
                    aria-label=pin_label
                    on:click=move |_| on_toggle_pin.run((pin_id.clone(), is_pinned))
                >
                    {if is_pinned { "★" } else { "☆" }}
                </button>
                {on_delete.map(|on_delete| {
                    view! {
                        <button
                            class="btn btn--ghost project-card__delete"
                            title="Delete project"
                            aria-label="Delete project"
                            on:click=move |_| on_delete.run(delete_id.clone())
                        >
                            "✕"
                        </button>
                    }
                })}
            </div>
            <p class="card__description">{project.description.unwrap_or_default()}</p>
            <div class="card__content">
                <div class="progress" aria-hidden="true">
                    <div class="progress__bar" style=format!("width: {percent}%")></div>
                </div>
                <span class="project-card__meta">{format!("{done}/{total} tasks done")}</span>
            </div>
        </div>
    }
}
