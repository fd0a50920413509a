//! Controls shared by every paginated table: filters, pagination, banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! These components mutate a `PagedResource<T>` signal and then call
//! `on_change` so the owning page can refetch through its `ApiContext`.

use leptos::prelude::*;
use wire::{Listing, StatusOption};

use crate::state::paged::PagedResource;

/// Search box plus status filter.
#[component]
pub fn ListFilters<T: Listing>(
    resource: RwSignal<PagedResource<T>>,
    options: &'static [StatusOption],
    placeholder: &'static str,
    on_change: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(resource.with_untracked(|r| r.search.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = draft.get();
        resource.update(|r| r.submit_search(&term));
        on_change.run(());
    };

    let on_status = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        resource.update(|r| r.set_status(Some(value)));
        on_change.run(());
    };

    view! {
        <div class="list-filters">
            <form class="list-filters__search" on:submit=on_submit>
                <input
                    class="list-filters__input"
                    type="search"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>
            <select
                class="list-filters__status"
                on:change=on_status
                prop:value=move || resource.with(|r| r.status.clone().unwrap_or_default())
            >
                <option value="">"All Status"</option>
                {options
                    .iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Previous/next controls, page indicator and jump-to-page input.
#[component]
pub fn Pagination<T: Listing>(resource: RwSignal<PagedResource<T>>, on_change: Callback<()>) -> impl IntoView {
    let jump = RwSignal::new(String::new());

    let step = move |forward: bool| {
        let changed = resource.try_update(|r| if forward { r.next() } else { r.prev() });
        if changed == Some(true) {
            on_change.run(());
        }
    };

    let on_jump = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(page) = jump.get().trim().parse::<u64>() else {
            return;
        };
        if resource.try_update(|r| r.go_to(page)) == Some(true) {
            jump.set(String::new());
            on_change.run(());
        }
    };

    view! {
        <div class="pagination">
            <button
                class="btn pagination__prev"
                disabled=move || !resource.with(PagedResource::can_prev)
                on:click=move |_| step(false)
            >
                "Previous"
            </button>
            <span class="pagination__indicator">{move || resource.with(PagedResource::indicator)}</span>
            <button
                class="btn pagination__next"
                disabled=move || !resource.with(PagedResource::can_next)
                on:click=move |_| step(true)
            >
                "Next"
            </button>
            <form class="pagination__jump" on:submit=on_jump>
                <input
                    class="pagination__jump-input"
                    type="number"
                    min="1"
                    placeholder="Page"
                    prop:value=move || jump.get()
                    on:input=move |ev| jump.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    "Go"
                </button>
            </form>
        </div>
    }
}

/// Inline error banner with a dismiss button.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="error-banner__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// Single placeholder row spanning the whole table.
#[component]
pub fn EmptyRow(columns: usize, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="table__empty">
            <td colspan=columns.to_string()>{message}</td>
        </tr>
    }
}

/// Detail overlay. Clicking the backdrop closes it.
#[component]
pub fn Modal(#[prop(into)] title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Label/value pair inside a detail overlay.
#[component]
pub fn DetailField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <p class="detail-field__label">{label}</p>
            <p class="detail-field__value">{value}</p>
        </div>
    }
}

/// Table header row from static column names.
#[component]
pub fn TableHead(columns: &'static [&'static str]) -> impl IntoView {
    view! {
        <thead>
            <tr>{columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
        </thead>
    }
}
