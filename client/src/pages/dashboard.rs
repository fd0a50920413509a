//! Dashboard: KPI cards, trend charts, service mix and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. All five sections are requested
//! together once per visit; a failing section adds to the banner while the
//! rest still render.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use wire::{Activity, BookingsTrendPoint, RevenueTrendPoint, ServiceShare};

use crate::components::bar_chart::{BarChart, ChartPoint};
use crate::components::listing::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::state::dashboard::DashboardState;
use crate::util::chart::share;
use crate::util::format::{activity_tone, count, egp, or_dash, percent, timestamp};

#[allow(clippy::cast_precision_loss)]
fn bookings_points(trend: &[BookingsTrendPoint]) -> Vec<ChartPoint> {
    trend
        .iter()
        .map(|p| ChartPoint { date: p.date.clone(), values: vec![p.bookings as f64] })
        .collect()
}

fn revenue_points(trend: &[RevenueTrendPoint]) -> Vec<ChartPoint> {
    trend
        .iter()
        .map(|p| ChartPoint { date: p.date.clone(), values: vec![p.revenue, p.commission] })
        .collect()
}

/// Service name, booking count and percentage share per distribution entry.
fn distribution_rows(shares: &[ServiceShare]) -> Vec<(String, u64, f64)> {
    let total: u64 = shares.iter().map(|s| s.count).sum();
    shares
        .iter()
        .map(|s| (or_dash(s.service_type.as_deref()), s.count, share(s.count, total)))
        .collect()
}

/// Start one load round for every dashboard section.
fn load(api: ApiContext, config: &ConsoleConfig, state: RwSignal<DashboardState>) {
    let Some(seq) = state.try_update(DashboardState::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        use wire::endpoints;
        use wire::{ActivityFeed, DashboardOverview, DistributionResponse, TrendResponse};

        use crate::state::dashboard::DashboardResults;
        use crate::state::paged::FetchOutcome;

        let activity_path = endpoints::recent_activity(config.activity_limit);
        let bookings_path = endpoints::bookings_trend(config.trend_days);
        let revenue_path = endpoints::revenue_trend(config.trend_days);
        let distribution_path = endpoints::service_distribution(config.revenue_days);
        leptos::task::spawn_local(async move {
            let (overview, activity, bookings_trend, revenue_trend, distribution) = futures::join!(
                api.get::<DashboardOverview>(endpoints::DASHBOARD_OVERVIEW),
                api.get::<ActivityFeed>(&activity_path),
                api.get::<TrendResponse<BookingsTrendPoint>>(&bookings_path),
                api.get::<TrendResponse<RevenueTrendPoint>>(&revenue_path),
                api.get::<DistributionResponse>(&distribution_path),
            );
            let results = DashboardResults { overview, activity, bookings_trend, revenue_trend, distribution };
            if state.try_update(|s| s.finish(seq, results)) == Some(FetchOutcome::Stale) {
                leptos::logging::log!("dropped stale dashboard response (seq {seq})");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, config, seq);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiContext>());
    let config = StoredValue::new(expect_context::<ConsoleConfig>());
    let state = RwSignal::new(DashboardState::default());

    Effect::new(move || load(api.get_value(), &config.get_value(), state));

    let overview = move || state.with(|s| s.overview.clone());

    view! {
        <div class="dashboard">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| state.update(|s| s.error = None))
            />
            <div class="stat-grid">
                <StatCard
                    title="Total Users"
                    value=Signal::derive(move || count(overview().users.total))
                    detail=Signal::derive(move || format!("+{} new today", count(overview().users.new_today)))
                    accent="blue"
                />
                <StatCard
                    title="Total Captains"
                    value=Signal::derive(move || count(overview().captains.total))
                    detail=Signal::derive(move || format!("{} pending approval", count(overview().captains.pending)))
                    accent="green"
                />
                <StatCard
                    title="Active Bookings"
                    value=Signal::derive(move || count(overview().bookings.active))
                    detail=Signal::derive(move || format!("{} today", count(overview().bookings.today)))
                    accent="orange"
                />
                <StatCard
                    title="Today's Revenue"
                    value=Signal::derive(move || egp(overview().revenue.today))
                    detail=Signal::derive(move || format!("{} commission", egp(overview().revenue.commission_today)))
                    accent="purple"
                />
            </div>
            <div class="chart-grid">
                <BarChart
                    title="Bookings Trend"
                    series={&["Bookings"]}
                    points=Signal::derive(move || state.with(|s| bookings_points(&s.bookings_trend)))
                />
                <BarChart
                    title="Revenue vs Commission"
                    series={&["Revenue", "Commission"]}
                    points=Signal::derive(move || state.with(|s| revenue_points(&s.revenue_trend)))
                />
            </div>
            <div class="panel-grid">
                <section class="panel">
                    <h3 class="panel__title">"Service Distribution"</h3>
                    {move || {
                        let rows = state.with(|s| distribution_rows(&s.distribution));
                        if rows.is_empty() {
                            return view! { <p class="panel__empty">"No bookings in this period"</p> }.into_any();
                        }
                        view! {
                            <ul class="share-list">
                                {rows
                                    .into_iter()
                                    .map(|(service, bookings, pct)| {
                                        view! {
                                            <li class="share-list__row">
                                                <span class="share-list__name">{service}</span>
                                                <span class="share-list__track">
                                                    <span class="share-list__fill" style=format!("width: {pct:.1}%")></span>
                                                </span>
                                                <span class="share-list__value">
                                                    {format!("{} ({})", count(bookings), percent(pct))}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Recent Activity"</h3>
                    {move || {
                        let activities = state.with(|s| s.activities.clone());
                        if activities.is_empty() {
                            return view! { <p class="panel__empty">"No recent activity"</p> }.into_any();
                        }
                        view! {
                            <ul class="activity-list">
                                {activities.into_iter().map(|a| view! { <ActivityRow activity=a/> }).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let status = activity.status.clone().unwrap_or_default();
    view! {
        <li class="activity-list__item">
            <div class="activity-list__body">
                <p class="activity-list__title">{or_dash(activity.title.as_deref())}</p>
                <p class="activity-list__description">{activity.description.clone().unwrap_or_default()}</p>
                <p class="activity-list__time">{timestamp(activity.timestamp.as_deref())}</p>
            </div>
            <StatusBadge label=or_dash(Some(status.as_str())) tone=activity_tone(&status)/>
        </li>
    }
}
