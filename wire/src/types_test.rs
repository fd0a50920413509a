use super::*;

#[test]
fn captain_listing_decodes_records_and_page_count() {
    let body = serde_json::json!({
        "captains": [{
            "captain_id": 42,
            "name": "Omar",
            "email": "omar@example.com",
            "vehicle_type": "Car",
            "rating": null,
            "status": "Pending"
        }],
        "pages": 3,
        "total": 21
    });
    let page = Page::<Captain>::from_value(body).unwrap();
    assert_eq!(page.pages, 3);
    assert_eq!(page.total, 21);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id(), 42);
    assert!(page.items[0].rating.abs() < f64::EPSILON);
    assert_eq!(page.items[0].phone_number, None);
}

#[test]
fn empty_listing_has_no_items_and_zero_pages() {
    let page = Page::<Captain>::from_value(serde_json::json!({"captains": [], "pages": 0})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pages, 0);
    assert_eq!(page.total, 0);
}

#[test]
fn missing_record_array_decodes_as_empty_page() {
    let page = Page::<AppUser>::from_value(serde_json::json!({"pages": 2})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pages, 2);
}

#[test]
fn non_object_listing_is_a_decode_error() {
    let err = Page::<Booking>::from_value(serde_json::json!([1, 2])).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn malformed_record_is_a_decode_error() {
    let err = Page::<Booking>::from_value(serde_json::json!({"bookings": [{"status": 5}]})).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn user_statistics_null_defaults_to_zero() {
    let user: AppUser = serde_json::from_value(serde_json::json!({
        "user_id": 7,
        "statistics": null
    }))
    .unwrap();
    assert_eq!(user.statistics.total_bookings, 0);
    assert!(user.statistics.total_spent.abs() < f64::EPSILON);
}

#[test]
fn dashboard_overview_tolerates_missing_sections() {
    let overview: DashboardOverview = serde_json::from_value(serde_json::json!({
        "users": {"total": 10, "new_today": null},
        "revenue": null
    }))
    .unwrap();
    assert_eq!(overview.users.total, 10);
    assert_eq!(overview.users.new_today, 0);
    assert_eq!(overview.captains.pending, 0);
    assert!(overview.revenue.today.abs() < f64::EPSILON);
}

#[test]
fn activity_kind_reads_type_key() {
    let feed: ActivityFeed = serde_json::from_value(serde_json::json!({
        "activities": [{"type": "booking", "id": 3, "title": "New Car booking"}]
    }))
    .unwrap();
    assert_eq!(feed.activities[0].kind.as_deref(), Some("booking"));
    assert_eq!(feed.activities[0].timestamp, None);
}

#[test]
fn revenue_trend_decodes_points() {
    let trend: TrendResponse<RevenueTrendPoint> = serde_json::from_value(serde_json::json!({
        "trend_data": [{"date": "2024-05-01", "revenue": 120.5, "commission": 12}],
        "date_range": {"start_date": "2024-04-25", "end_date": "2024-05-01"}
    }))
    .unwrap();
    assert_eq!(trend.trend_data.len(), 1);
    assert!((trend.trend_data[0].commission - 12.0).abs() < f64::EPSILON);
}

#[test]
fn financial_overview_reads_nested_totals() {
    let overview: FinancialOverview = serde_json::from_value(serde_json::json!({
        "overview": {"total_revenue": 1000, "total_commission": 150, "commission_percentage": 15},
        "payment_methods": {"cash": 600, "instapay": null},
        "transaction_count": 12
    }))
    .unwrap();
    assert!((overview.overview.total_revenue - 1000.0).abs() < f64::EPSILON);
    assert!(overview.payment_methods.instapay.abs() < f64::EPSILON);
    assert_eq!(overview.transaction_count, 12);
}

#[test]
fn status_label_maps_known_values_and_passes_through_unknown() {
    assert_eq!(status_label(CAPTAIN_STATUSES, "OnHold"), "On Hold");
    assert_eq!(status_label(BOOKING_STATUSES, "EnRoute"), "En Route");
    assert_eq!(status_label(USER_STATUSES, "Suspended"), "Suspended");
}

#[test]
fn booking_status_update_serializes_notes() {
    let body = serde_json::to_value(BookingStatusUpdate {
        status: "Cancelled".into(),
        notes: "rider no-show".into(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"status": "Cancelled", "notes": "rider no-show"}));
}

#[test]
fn captain_rates_decode_from_bare_array() {
    let body = r#"[
        {"rate_id": 1, "captain_id": 4, "service_type": "InsideCity", "rate_per_km": 3.5,
         "minimum_fare": 20, "waiting_time_rate": null, "updated_at": "2024-05-01T10:00:00"},
        {"rate_id": 2, "service_type": "AirportDropoff", "rate_per_km": "4.25"}
    ]"#;
    let rates: Vec<CaptainRate> = serde_json::from_str(body).unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].service_type.as_deref(), Some("InsideCity"));
    assert!((rates[0].minimum_fare - 20.0).abs() < f64::EPSILON);
    assert!(rates[0].waiting_time_rate.abs() < f64::EPSILON);
    assert!((rates[1].rate_per_km - 4.25).abs() < f64::EPSILON);
    assert!(rates[1].minimum_fare.abs() < f64::EPSILON);
}

#[test]
fn rate_update_serializes_every_field() {
    let body = RateUpdate {
        service_type: "CrossCity".to_owned(),
        rate_per_km: 5.0,
        minimum_fare: 40.0,
        waiting_time_rate: 1.5,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "service_type": "CrossCity",
            "rate_per_km": 5.0,
            "minimum_fare": 40.0,
            "waiting_time_rate": 1.5
        })
    );
}

#[test]
fn service_type_labels() {
    assert_eq!(status_label(SERVICE_TYPES, "AirportDropoff"), "Airport Drop-off");
    assert_eq!(status_label(SERVICE_TYPES, "Helicopter"), "Helicopter");
}
