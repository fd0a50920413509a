use super::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Totals {
    #[serde(default, deserialize_with = "amount_or_zero")]
    revenue: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    bookings: u64,
}

#[derive(Debug, Deserialize)]
struct Wrapper {
    #[serde(default, deserialize_with = "null_as_default")]
    totals: Totals,
}

#[test]
fn amount_value_accepts_numbers_and_numeric_strings() {
    assert!((amount_value(&serde_json::json!(12.5)) - 12.5).abs() < f64::EPSILON);
    assert!((amount_value(&serde_json::json!(" 7.25 ")) - 7.25).abs() < f64::EPSILON);
}

#[test]
fn amount_value_maps_garbage_to_zero() {
    assert!(amount_value(&serde_json::json!(null)).abs() < f64::EPSILON);
    assert!(amount_value(&serde_json::json!("n/a")).abs() < f64::EPSILON);
    assert!(amount_value(&serde_json::json!({"x": 1})).abs() < f64::EPSILON);
}

#[test]
fn count_value_clamps_negative_and_truncates_fractions() {
    assert_eq!(count_value(&serde_json::json!(-3)), 0);
    assert_eq!(count_value(&serde_json::json!(4.9)), 4);
    assert_eq!(count_value(&serde_json::json!("12")), 12);
}

#[test]
fn missing_and_null_numeric_fields_default_to_zero() {
    let missing: Totals = serde_json::from_str("{}").unwrap();
    assert!(missing.revenue.abs() < f64::EPSILON);
    assert_eq!(missing.bookings, 0);

    let nulls: Totals = serde_json::from_str(r#"{"revenue":null,"bookings":null}"#).unwrap();
    assert!(nulls.revenue.abs() < f64::EPSILON);
    assert_eq!(nulls.bookings, 0);
}

#[test]
fn null_nested_object_uses_default() {
    let wrapped: Wrapper = serde_json::from_str(r#"{"totals":null}"#).unwrap();
    assert_eq!(wrapped.totals.bookings, 0);

    let absent: Wrapper = serde_json::from_str("{}").unwrap();
    assert_eq!(absent.totals.bookings, 0);
}
