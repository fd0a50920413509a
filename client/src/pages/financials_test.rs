use super::*;

#[test]
fn daily_points_pair_revenue_with_commission() {
    let days = vec![
        DailyRevenue { date: "2024-05-01".into(), total_revenue: 1200.0, total_commission: 180.0, booking_count: 14 },
        DailyRevenue { date: "2024-05-02".into(), ..DailyRevenue::default() },
    ];
    let points = daily_points(&days);
    assert_eq!(points[0], ChartPoint { date: "2024-05-01".into(), values: vec![1200.0, 180.0] });
    assert_eq!(points[1].values, vec![0.0, 0.0]);
}

#[test]
fn no_days_no_points() {
    assert!(daily_points(&[]).is_empty());
}
