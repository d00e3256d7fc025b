//! Summary card showing one headline number.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    description: &'static str,
    #[prop(into)] value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <p class="card__description">{description}</p>
            </div>
            <div class="card__content">
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
