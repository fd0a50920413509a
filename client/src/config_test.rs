use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> ConsoleConfig {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ConsoleConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    assert_eq!(config_from(&[]), ConsoleConfig::default());
}

#[test]
fn overrides_are_applied() {
    let config = config_from(&[
        ("ADMIN_API_BASE", "https://api.example.com/"),
        ("ADMIN_PER_PAGE", "25"),
        ("ADMIN_AUTH_FAILURE_POLICY", "Logout"),
        ("ADMIN_TREND_DAYS", "14"),
        ("ADMIN_REVENUE_DAYS", "60"),
        ("ADMIN_ACTIVITY_LIMIT", "8"),
    ]);
    assert_eq!(config.api_base, "https://api.example.com");
    assert_eq!(config.per_page, 25);
    assert_eq!(config.auth_failure_policy, AuthFailurePolicy::Logout);
    assert_eq!(config.trend_days, 14);
    assert_eq!(config.revenue_days, 60);
    assert_eq!(config.activity_limit, 8);
}

#[test]
fn invalid_and_zero_values_fall_back_to_defaults() {
    let config = config_from(&[
        ("ADMIN_PER_PAGE", "zero"),
        ("ADMIN_TREND_DAYS", "0"),
        ("ADMIN_AUTH_FAILURE_POLICY", "panic"),
    ]);
    assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    assert_eq!(config.trend_days, DEFAULT_TREND_DAYS);
    assert_eq!(config.auth_failure_policy, AuthFailurePolicy::Ignore);
}
