//! Dashboard page: per-user summary cards plus the first few projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It asks the projects and tasks
//! stores to load whenever a user becomes available, then derives everything
//! it shows through `DashboardSummary`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::project_list::ProjectList;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardSummary, load_error};
use crate::state::projects::{self, ProjectsState};
use crate::state::tasks::TasksState;
use crate::util::auth::install_unauth_redirect;
use crate::util::store_sync::install_store_reload;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects_store = expect_context::<RwSignal<ProjectsState>>();
    let tasks_store = expect_context::<RwSignal<TasksState>>();

    install_unauth_redirect(auth, use_navigate());
    install_store_reload(auth, projects_store, tasks_store);

    let summary = Memo::new(move |_| {
        let user = auth.with(|a| a.user.clone());
        projects_store.with(|p| tasks_store.with(|t| DashboardSummary::build(user.as_ref(), &p.items, &t.items)))
    });

    let on_toggle_pin = Callback::new(move |(project_id, is_pinned): (String, bool)| {
        projects::toggle_pin(projects_store, project_id, is_pinned);
    });
    let error = move || {
        projects_store.with(|p| tasks_store.with(|t| load_error(p.error.as_deref(), t.error.as_deref())))
    };

    view! {
        <div class="page dashboard-page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <a class="btn btn--primary" href="/projects">
                    "Create Project"
                </a>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Total Projects"
                    description="Your personal projects"
                    value=Signal::derive(move || summary.with(|s| s.total_projects))
                />
                <StatCard
                    title="Total Tasks"
                    description="Across your projects"
                    value=Signal::derive(move || summary.with(|s| s.total_tasks))
                />
                <StatCard
                    title="Completed Tasks"
                    description="Your completed tasks"
                    value=Signal::derive(move || summary.with(|s| s.completed_tasks))
                />
            </div>

            <section class="dashboard-page__projects">
                <div class="page__header page__header--section">
                    <h2 class="page__subtitle">"Your Projects"</h2>
                    <a class="btn btn--outline" href="/projects">
                        "View All Projects"
                    </a>
                </div>

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
                    {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
                    {move || {
                        summary
                            .with(DashboardSummary::overflow_notice)
                            .map(|notice| view! { <p class="text-muted">{notice}</p> })
                    }}
                    {move || {
                        view! {
                            <ProjectList
                                projects=summary.with(|s| s.recent.clone())
                                on_toggle_pin=on_toggle_pin
                            />
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
