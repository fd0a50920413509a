//! Root application component with routing, route guard and context providers.

use leptos::context::Provider;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::layout::Shell;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::pages::{
    bookings::BookingsPage, captains::CaptainsPage, dashboard::DashboardPage, financials::FinancialsPage,
    login::LoginPage, users::UsersPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::restore_session;
use crate::util::routing::{Destination, RouteDecision, resolve};

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
/// Provides the console config, auth and chrome state, restores the stored
/// session once hydrated, and sends every route through [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(ConsoleConfig::from_build_env());
    provide_context(auth);
    provide_context(ui);

    // Effects only run in the browser, so SSR and hydration both see Loading.
    Effect::new(move || {
        if auth.with_untracked(AuthState::is_loading) {
            restore_session(auth);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/touts-routes.css"/>
        <Title text="Tout's Routes Admin"/>

        <Router>
            <Routes fallback=|| view! { <Guarded/> }>
                <Route path=StaticSegment("") view=Guarded/>
                <Route path=StaticSegment("login") view=Guarded/>
                <Route path=StaticSegment("dashboard") view=Guarded/>
                <Route path=StaticSegment("captains") view=Guarded/>
                <Route path=StaticSegment("users") view=Guarded/>
                <Route path=StaticSegment("bookings") view=Guarded/>
                <Route path=StaticSegment("financials") view=Guarded/>
            </Routes>
        </Router>
    }
}

/// Applies [`resolve`] to the current path and auth state.
#[component]
fn Guarded() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ConsoleConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| location.pathname.with(|path| auth.with(|state| resolve(path, state))));

    Effect::new(move || {
        if let RouteDecision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        RouteDecision::ShowLoading | RouteDecision::Redirect(_) => loading_view().into_any(),
        RouteDecision::ShowLogin => view! { <LoginPage/> }.into_any(),
        RouteDecision::ShowShell(destination) => {
            let Some(session) = auth.with_untracked(|state| state.session().cloned()) else {
                return loading_view().into_any();
            };
            let api = ApiContext::new(&config, &session, auth);
            view! {
                <Provider value=api>
                    <Shell destination=destination>{destination_view(destination)}</Shell>
                </Provider>
            }
            .into_any()
        }
    }
}

fn destination_view(destination: Destination) -> AnyView {
    match destination {
        Destination::Dashboard => view! { <DashboardPage/> }.into_any(),
        Destination::Captains => view! { <CaptainsPage/> }.into_any(),
        Destination::Users => view! { <UsersPage/> }.into_any(),
        Destination::Bookings => view! { <BookingsPage/> }.into_any(),
        Destination::Financials => view! { <FinancialsPage/> }.into_any(),
    }
}

fn loading_view() -> impl IntoView {
    view! {
        <div class="route-loading">
            <div class="route-loading__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
