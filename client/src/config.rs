//! Console configuration baked in at build time.
//!
//! Values come from `option_env!` when the WASM bundle is compiled, so a
//! deployment picks its API base and page sizes with plain environment
//! variables. Unparseable values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const DEFAULT_TREND_DAYS: u32 = 7;
pub const DEFAULT_REVENUE_DAYS: u32 = 30;
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 5;

/// What a 401 from the API does to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFailurePolicy {
    /// Report it inline like any other failure.
    #[default]
    Ignore,
    /// Clear the session and return to the login screen.
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// API origin; empty means same origin as the console.
    pub api_base: String,
    pub per_page: u64,
    pub auth_failure_policy: AuthFailurePolicy,
    pub trend_days: u32,
    pub revenue_days: u32,
    pub activity_limit: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            per_page: DEFAULT_PER_PAGE,
            auth_failure_policy: AuthFailurePolicy::Ignore,
            trend_days: DEFAULT_TREND_DAYS,
            revenue_days: DEFAULT_REVENUE_DAYS,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl ConsoleConfig {
    /// Configuration captured from the build environment.
    ///
    /// - `ADMIN_API_BASE`: default empty (same origin)
    /// - `ADMIN_PER_PAGE`: default 10
    /// - `ADMIN_AUTH_FAILURE_POLICY`: `ignore` (default) or `logout`
    /// - `ADMIN_TREND_DAYS`: default 7
    /// - `ADMIN_REVENUE_DAYS`: default 30
    /// - `ADMIN_ACTIVITY_LIMIT`: default 5
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let raw = match key {
                "ADMIN_API_BASE" => option_env!("ADMIN_API_BASE"),
                "ADMIN_PER_PAGE" => option_env!("ADMIN_PER_PAGE"),
                "ADMIN_AUTH_FAILURE_POLICY" => option_env!("ADMIN_AUTH_FAILURE_POLICY"),
                "ADMIN_TREND_DAYS" => option_env!("ADMIN_TREND_DAYS"),
                "ADMIN_REVENUE_DAYS" => option_env!("ADMIN_REVENUE_DAYS"),
                "ADMIN_ACTIVITY_LIMIT" => option_env!("ADMIN_ACTIVITY_LIMIT"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("ADMIN_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();
        Self {
            api_base,
            per_page: parse_positive(&lookup, "ADMIN_PER_PAGE", DEFAULT_PER_PAGE),
            auth_failure_policy: parse_policy(lookup("ADMIN_AUTH_FAILURE_POLICY").as_deref()),
            trend_days: parse_positive(&lookup, "ADMIN_TREND_DAYS", DEFAULT_TREND_DAYS),
            revenue_days: parse_positive(&lookup, "ADMIN_REVENUE_DAYS", DEFAULT_REVENUE_DAYS),
            activity_limit: parse_positive(&lookup, "ADMIN_ACTIVITY_LIMIT", DEFAULT_ACTIVITY_LIMIT),
        }
    }
}

fn parse_positive<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}

fn parse_policy(raw: Option<&str>) -> AuthFailurePolicy {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("logout") => AuthFailurePolicy::Logout,
        _ => AuthFailurePolicy::Ignore,
    }
}
