use super::*;
use wire::FinancialTotals;

fn overview(revenue: f64) -> FinancialOverview {
    FinancialOverview {
        overview: FinancialTotals { total_revenue: revenue, ..Default::default() },
        ..Default::default()
    }
}

#[test]
fn finish_applies_both_sections() {
    let mut state = FinancialsState::default();
    let seq = state.begin();
    let daily = DailyRevenueResponse {
        daily_revenue: vec![DailyRevenue { date: "2024-05-01".into(), total_revenue: 50.0, ..Default::default() }],
    };
    assert_eq!(state.finish(seq, Ok(overview(100.0)), Ok(daily)), FetchOutcome::Applied);
    assert!((state.overview.overview.total_revenue - 100.0).abs() < f64::EPSILON);
    assert_eq!(state.daily_revenue.len(), 1);
    assert_eq!(state.error, None);
}

#[test]
fn failed_section_sets_error_but_keeps_other() {
    let mut state = FinancialsState::default();
    let seq = state.begin();
    state.finish(
        seq,
        Ok(overview(10.0)),
        Err(ApiError::Status { status: 500, message: Some("db down".into()) }),
    );
    assert_eq!(state.error.as_deref(), Some("Failed to fetch daily revenue: db down"));
    assert!((state.overview.overview.total_revenue - 10.0).abs() < f64::EPSILON);
}

#[test]
fn stale_round_is_ignored() {
    let mut state = FinancialsState::default();
    let old = state.begin();
    state.begin();
    assert_eq!(
        state.finish(old, Ok(overview(1.0)), Ok(DailyRevenueResponse::default())),
        FetchOutcome::Stale
    );
    assert!(state.overview.overview.total_revenue.abs() < f64::EPSILON);
}

#[test]
fn only_one_export_runs_at_a_time() {
    let mut state = FinancialsState::default();
    assert!(state.begin_export(ExportKind::Transactions));
    assert!(!state.begin_export(ExportKind::Commissions));
    state.finish_export(Ok("Exported 3 transaction records".into()));
    assert_eq!(state.exporting, None);
    assert_eq!(state.export_message.as_deref(), Some("Exported 3 transaction records"));
    assert!(state.begin_export(ExportKind::Commissions));
    assert_eq!(state.export_message, None);
}
