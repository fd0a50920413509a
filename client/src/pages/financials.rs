//! Financial management: revenue totals, daily revenue, commission ledger and
//! record exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! The aggregates live in `FinancialsState`; the commission table is an
//! ordinary `PagedResource<Commission>` sharing the list controls with the
//! other management screens. Exports are offered as JSON downloads.

#[cfg(test)]
#[path = "financials_test.rs"]
mod financials_test;

use leptos::prelude::*;
use wire::{Commission, DailyRevenue, ExportKind};

use crate::components::bar_chart::{BarChart, ChartPoint};
use crate::components::listing::{EmptyRow, ErrorBanner, Pagination, TableHead};
use crate::components::stat_card::StatCard;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::net::listing::refresh;
use crate::state::financials::FinancialsState;
use crate::state::paged::PagedResource;
use crate::util::format::{count, egp, or_dash, percent, timestamp};

const COLUMNS: &[&str] = &["Booking ID", "User", "Captain", "Final Fare", "Commission", "Captain Earning"];

fn daily_points(days: &[DailyRevenue]) -> Vec<ChartPoint> {
    days.iter()
        .map(|d| ChartPoint { date: d.date.clone(), values: vec![d.total_revenue, d.total_commission] })
        .collect()
}

fn load(api: ApiContext, revenue_days: u32, state: RwSignal<FinancialsState>) {
    let Some(seq) = state.try_update(FinancialsState::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        use wire::{DailyRevenueResponse, FinancialOverview, endpoints};

        use crate::state::paged::FetchOutcome;

        let daily_path = endpoints::daily_revenue(revenue_days);
        leptos::task::spawn_local(async move {
            let (overview, daily) = futures::join!(
                api.get::<FinancialOverview>(endpoints::FINANCIAL_OVERVIEW),
                api.get::<DailyRevenueResponse>(&daily_path),
            );
            if state.try_update(|s| s.finish(seq, overview, daily)) == Some(FetchOutcome::Stale) {
                leptos::logging::log!("dropped stale financials response (seq {seq})");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, revenue_days, seq);
    }
}

/// Fetch an export and hand it to the browser as a download.
fn export(api: ApiContext, kind: ExportKind, state: RwSignal<FinancialsState>) {
    if state.try_update(|s| s.begin_export(kind)) != Some(true) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::download::{export_contents, export_file_name, export_summary, offer_download};

        let result = match api.get::<wire::ExportResponse>(&wire::endpoints::export(kind)).await {
            Ok(response) => export_contents(&response)
                .and_then(|contents| offer_download(&export_file_name(kind), &contents))
                .map(|()| export_summary(kind, &response)),
            Err(e) => Err(e.user_message(&format!("export {}", kind.as_str()))),
        };
        if let Err(message) = &result {
            leptos::logging::warn!("{message}");
        }
        state.update(|s| s.finish_export(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api;
        state.update(|s| s.finish_export(Err("Exports are only available in the browser".to_owned())));
    }
}

#[component]
pub fn FinancialsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiContext>());
    let config = expect_context::<ConsoleConfig>();
    let revenue_days = config.revenue_days;
    let state = RwSignal::new(FinancialsState::default());
    let commissions = RwSignal::new(PagedResource::<Commission>::new(config.per_page));

    let reload = Callback::new(move |()| refresh(api.get_value(), commissions));
    Effect::new(move || {
        load(api.get_value(), revenue_days, state);
        reload.run(());
    });

    let totals = move || state.with(|s| s.overview.overview.clone());
    let methods = move || state.with(|s| s.overview.payment_methods.clone());

    let rows = move || {
        let items = commissions.with(|r| r.items.clone());
        if items.is_empty() {
            return view! { <EmptyRow columns=COLUMNS.len() message={PagedResource::<Commission>::empty_message()}/> }
                .into_any();
        }
        items
            .into_iter()
            .map(|c| {
                view! {
                    <tr>
                        <td class="table__strong" title=timestamp(c.booking_time.as_deref())>
                            {format!("#{}", c.booking_id)}
                        </td>
                        <td>{or_dash(c.user_name.as_deref())}</td>
                        <td>{or_dash(c.captain_name.as_deref())}</td>
                        <td>{egp(c.final_fare)}</td>
                        <td class="table__accent">{egp(c.app_commission)}</td>
                        <td>{egp(c.captain_earning)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let export_button = move |kind: ExportKind| {
        view! {
            <button
                class="btn btn--primary"
                disabled=move || state.with(|s| s.exporting.is_some())
                on:click=move |_| export(api.get_value(), kind, state)
            >
                {move || {
                    if state.with(|s| s.exporting == Some(kind)) {
                        "Exporting...".to_owned()
                    } else {
                        kind.label().to_owned()
                    }
                }}
            </button>
        }
    };

    view! {
        <div class="financials">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| state.update(|s| s.error = None))
            />
            <div class="stat-grid">
                <StatCard
                    title="Total Revenue"
                    value=Signal::derive(move || egp(totals().total_revenue))
                    detail=Signal::derive(move || {
                        format!("{} transactions", count(state.with(|s| s.overview.transaction_count)))
                    })
                    accent="blue"
                />
                <StatCard
                    title="App Commission"
                    value=Signal::derive(move || egp(totals().total_commission))
                    detail=Signal::derive(move || format!("{} of revenue", percent(totals().commission_percentage)))
                    accent="green"
                />
                <StatCard
                    title="Captain Earnings"
                    value=Signal::derive(move || egp(totals().total_captain_earnings))
                    detail=Signal::derive(|| "Paid out to captains".to_owned())
                    accent="orange"
                />
                <StatCard
                    title="Payment Methods"
                    value=Signal::derive(move || format!("Cash: {}", egp(methods().cash)))
                    detail=Signal::derive(move || format!("InstaPay: {}", egp(methods().instapay)))
                    accent="purple"
                />
            </div>
            <BarChart
                title="Daily Revenue"
                series={&["Revenue", "Commission"]}
                points=Signal::derive(move || state.with(|s| daily_points(&s.daily_revenue)))
            />
            <section class="panel">
                <h3 class="panel__title">"Commission Transactions"</h3>
                <Show when=move || commissions.with(|r| r.error.is_some())>
                    <ErrorBanner
                        message=Signal::derive(move || commissions.with(|r| r.error.clone()))
                        on_dismiss=Callback::new(move |()| commissions.update(PagedResource::dismiss_error))
                    />
                </Show>
                <div class="table-wrap" class:table-wrap--loading=move || commissions.with(|r| r.loading)>
                    <table class="table">
                        <TableHead columns=COLUMNS/>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
                <Pagination resource=commissions on_change=reload/>
            </section>
            <section class="panel export-panel">
                <h3 class="panel__title">"Export Data"</h3>
                <div class="export-panel__actions">
                    {export_button(ExportKind::Transactions)} {export_button(ExportKind::Commissions)}
                </div>
                <Show when=move || state.with(|s| s.export_message.is_some())>
                    <p class="export-panel__message">
                        {move || state.with(|s| s.export_message.clone().unwrap_or_default())}
                    </p>
                </Show>
            </section>
        </div>
    }
}
