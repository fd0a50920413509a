use super::*;

#[test]
fn bookings_trend_becomes_single_series() {
    let trend = vec![
        BookingsTrendPoint { date: "2024-05-01".into(), bookings: 12 },
        BookingsTrendPoint { date: "2024-05-02".into(), bookings: 0 },
    ];
    let points = bookings_points(&trend);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], ChartPoint { date: "2024-05-01".into(), values: vec![12.0] });
    assert_eq!(points[1].values, vec![0.0]);
}

#[test]
fn revenue_trend_keeps_revenue_before_commission() {
    let trend = vec![RevenueTrendPoint { date: "2024-05-01".into(), revenue: 500.0, commission: 75.0 }];
    assert_eq!(revenue_points(&trend)[0].values, vec![500.0, 75.0]);
}

#[test]
fn distribution_rows_carry_shares() {
    let shares = vec![
        ServiceShare { service_type: Some("Economy".into()), count: 3 },
        ServiceShare { service_type: None, count: 1 },
    ];
    let rows = distribution_rows(&shares);
    assert_eq!(rows[0], ("Economy".to_owned(), 3, 75.0));
    assert_eq!(rows[1], ("-".to_owned(), 1, 25.0));
}

#[test]
fn empty_distribution_has_no_rows() {
    assert!(distribution_rows(&[]).is_empty());
    let zero = vec![ServiceShare { service_type: Some("Comfort".into()), count: 0 }];
    assert_eq!(distribution_rows(&zero)[0].2, 0.0);
}
