//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, project::ProjectPage, projects::ProjectsPage};
use crate::state::{auth::AuthState, projects::ProjectsState, tasks::TasksState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, projects, and tasks stores and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let projects = RwSignal::new(ProjectsState::default());
    let tasks = RwSignal::new(TasksState::default());

    provide_context(auth);
    provide_context(projects);
    provide_context(tasks);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectPage/>
                </Routes>
            </main>
        </Router>
    }
}
