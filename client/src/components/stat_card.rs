//! KPI card with a headline value and a secondary line.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] detail: Signal<String>,
    /// Accent modifier, e.g. `blue` renders `stat-card--blue`.
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{accent}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{move || value.get()}</p>
            <p class="stat-card__detail">{move || detail.get()}</p>
        </div>
    }
}
