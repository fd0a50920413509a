use super::*;
use wire::{ServiceShare, UserCounts};

fn all_ok() -> DashboardResults {
    DashboardResults {
        overview: Ok(DashboardOverview { users: UserCounts { total: 12, active: 10, new_today: 2 }, ..Default::default() }),
        activity: Ok(ActivityFeed { activities: vec![Activity { title: Some("New Car booking".into()), ..Default::default() }] }),
        bookings_trend: Ok(TrendResponse { trend_data: vec![BookingsTrendPoint { date: "2024-05-01".into(), bookings: 4 }] }),
        revenue_trend: Ok(TrendResponse::default()),
        distribution: Ok(DistributionResponse {
            distribution_data: vec![
                ServiceShare { service_type: Some("Car".into()), count: 3 },
                ServiceShare { service_type: Some("Bike".into()), count: 1 },
            ],
        }),
    }
}

#[test]
fn successful_round_fills_every_section() {
    let mut state = DashboardState::default();
    let seq = state.begin();
    assert!(state.loading);
    assert_eq!(state.finish(seq, all_ok()), FetchOutcome::Applied);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.overview.users.total, 12);
    assert_eq!(state.activities.len(), 1);
    assert_eq!(state.bookings_trend[0].bookings, 4);
    assert_eq!(state.distribution_total(), 4);
}

#[test]
fn partial_failure_reports_each_section_and_keeps_others() {
    let mut state = DashboardState::default();
    let seq = state.begin();
    let mut results = all_ok();
    results.activity = Err(ApiError::Status { status: 500, message: None });
    results.revenue_trend = Err(ApiError::Transport("offline".into()));
    state.finish(seq, results);

    assert_eq!(state.error.as_deref(), Some("Failed to fetch recent activity. offline"));
    assert_eq!(state.overview.users.total, 12);
    assert!(state.activities.is_empty());
}

#[test]
fn older_round_is_discarded() {
    let mut state = DashboardState::default();
    let first = state.begin();
    let second = state.begin();
    assert_eq!(state.finish(first, all_ok()), FetchOutcome::Stale);
    assert!(state.loading);
    assert_eq!(state.overview.users.total, 0);
    assert_eq!(state.finish(second, all_ok()), FetchOutcome::Applied);
}

#[test]
fn defaults_render_zeroes() {
    let state = DashboardState::default();
    assert_eq!(state.overview.captains.pending, 0);
    assert!(state.overview.revenue.today.abs() < f64::EPSILON);
    assert_eq!(state.distribution_total(), 0);
}
