//! Endpoint paths and query strings for the admin API.
//!
//! Every builder returns a path relative to the API base; [`join`] prefixes
//! the configured base. Query values are percent-encoded and empty optional
//! parameters are omitted entirely.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/api/admin/login";

pub const DASHBOARD_OVERVIEW: &str = "/api/dashboard/overview";
pub const FINANCIAL_OVERVIEW: &str = "/api/financials/overview";

/// Query for one page of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub per_page: u64,
    /// Free-text search; blank means no search.
    pub search: String,
    /// API status value; `None` means all statuses.
    pub status: Option<String>,
}

impl ListQuery {
    /// Parameters in wire order, with blank search and status dropped.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("page", self.page.to_string()), ("per_page", self.per_page.to_string())];
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            out.push(("status", status.to_owned()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            out.push(("search", search.to_owned()));
        }
        out
    }

    /// Listing path with this query appended.
    #[must_use]
    pub fn to_path(&self, base_path: &str) -> String {
        with_query(base_path, &self.pairs())
    }
}

/// Append percent-encoded `pairs` to `path`.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Prefix an API path with the configured base. A blank base means same origin.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    format!("{base}{path}")
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// MUTATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptainAction {
    Approve,
    Reject,
}

impl CaptainAction {
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

#[must_use]
pub fn captain_action(id: u64, action: CaptainAction) -> String {
    format!("/api/captains/{id}/{}", action.verb())
}

#[must_use]
pub fn captain_status(id: u64) -> String {
    format!("/api/captains/{id}/status")
}

/// Rate table for one captain: `GET` lists it, `PUT` upserts one service.
#[must_use]
pub fn captain_rates(id: u64) -> String {
    format!("/api/captains/{id}/rates")
}

/// Paged booking history of one rider; answers the bookings envelope.
#[must_use]
pub fn user_bookings(id: u64) -> String {
    format!("/api/users/{id}/bookings")
}

#[must_use]
pub fn user_status(id: u64) -> String {
    format!("/api/users/{id}/status")
}

#[must_use]
pub fn booking_status(id: u64) -> String {
    format!("/api/bookings/{id}/status")
}

#[must_use]
pub fn booking_resolve(id: u64) -> String {
    format!("/api/bookings/{id}/resolve")
}

// =============================================================================
// DASHBOARD & FINANCIALS
// =============================================================================

#[must_use]
pub fn recent_activity(limit: u32) -> String {
    with_query("/api/dashboard/recent-activity", &[("limit", limit.to_string())])
}

#[must_use]
pub fn bookings_trend(days: u32) -> String {
    with_query("/api/dashboard/charts/bookings-trend", &[("days", days.to_string())])
}

#[must_use]
pub fn revenue_trend(days: u32) -> String {
    with_query("/api/dashboard/charts/revenue-trend", &[("days", days.to_string())])
}

#[must_use]
pub fn service_distribution(days: u32) -> String {
    with_query("/api/dashboard/charts/service-distribution", &[("days", days.to_string())])
}

#[must_use]
pub fn daily_revenue(days: u32) -> String {
    with_query("/api/financials/daily-revenue", &[("days", days.to_string())])
}

/// Record set offered by the financial export endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Transactions,
    Commissions,
}

impl ExportKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Commissions => "commissions",
        }
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transactions => "Export Transactions",
            Self::Commissions => "Export Commissions",
        }
    }
}

#[must_use]
pub fn export(kind: ExportKind) -> String {
    with_query("/api/financials/export", &[("type", kind.as_str().to_owned())])
}
