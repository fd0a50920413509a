//! Authenticated shell: collapsible sidebar, header and routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every console screen renders inside this shell. The menu is derived from
//! the routing table, the header shows the signed-in admin, and logout
//! clears the session before returning to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;
use crate::util::routing::{Destination, LOGIN_PATH, NAV};

const BRAND: &str = "Tout's Routes";

#[component]
pub fn Shell(destination: Destination, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let profile = move || auth.get().session().map(|s| s.profile.clone()).unwrap_or_default();

    let on_logout = move |_| {
        sign_out(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <aside class=move || ui.get().sidebar_class()>
                <div class="sidebar__brand">
                    <Show
                        when=move || !ui.get().sidebar_collapsed
                        fallback=|| view! { <span class="sidebar__logo">"TR"</span> }
                    >
                        <span class="sidebar__logo">{BRAND}</span>
                    </Show>
                    <button
                        class="btn sidebar__toggle"
                        title="Toggle sidebar"
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                    >
                        {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="sidebar__nav">
                    {NAV
                        .into_iter()
                        .map(|item| {
                            let class = if item == destination {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            };
                            view! {
                                <a href=item.path() class=class title=item.label()>
                                    <span class="sidebar__icon">{nav_glyph(item)}</span>
                                    <Show when=move || !ui.get().sidebar_collapsed>
                                        <span class="sidebar__label">{item.label()}</span>
                                    </Show>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <div class="shell__main">
                <header class="shell__header">
                    <h1 class="shell__title">{format!("{BRAND} Admin Panel")}</h1>
                    <span class="shell__spacer"></span>
                    <div class="shell__admin">
                        <span class="avatar">{move || profile().initial()}</span>
                        <div class="shell__admin-text">
                            <span class="shell__admin-name">{move || profile().display_name().to_owned()}</span>
                            <span class="shell__admin-email">{move || profile().email}</span>
                        </div>
                    </div>
                    <button class="btn shell__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="shell__content">
                    <h2 class="shell__page-title">{destination.title()}</h2>
                    {children()}
                </main>
            </div>
        </div>
    }
}

fn nav_glyph(destination: Destination) -> &'static str {
    match destination {
        Destination::Dashboard => "▦",
        Destination::Captains => "⛟",
        Destination::Users => "☺",
        Destination::Bookings => "⇄",
        Destination::Financials => "$",
    }
}
