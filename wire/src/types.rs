//! Records, aggregates and request bodies exchanged with the admin API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON keys. Strings are optional because the
//! API emits `null` for unset columns; numbers go through [`crate::de`] so a
//! missing aggregate renders as zero instead of failing the response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{amount_or_zero, count_or_zero, count_value, null_as_default};
use crate::error::ApiError;

// =============================================================================
// LISTINGS
// =============================================================================

/// A record type served by a paginated listing endpoint.
///
/// The endpoint answers `{ <KEY>: [...], pages: N, total?: N }`.
pub trait Listing: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    /// Listing endpoint path, relative to the API base.
    const PATH: &'static str;
    /// Envelope key holding the record array.
    const KEY: &'static str;
    /// Plural noun used in placeholder rows and error messages.
    const NOUN: &'static str;

    /// Stable identifier used in mutation paths.
    fn id(&self) -> u64;
}

/// One decoded page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pages: u64,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), pages: 0, total: 0 }
    }
}

impl<T: Listing> Page<T> {
    /// Decode a listing envelope. A missing record array is an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not an object or a record
    /// does not match `T`.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let Value::Object(mut map) = value else {
            return Err(ApiError::Decode(format!("{} listing is not an object", T::NOUN)));
        };
        let pages = map.get("pages").map_or(0, count_value);
        let items: Vec<T> = match map.remove(T::KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))?,
        };
        let total = map
            .get("total")
            .map_or(items.len() as u64, count_value);
        Ok(Self { items, pages, total })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A driver/vehicle operator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Captain {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub captain_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Service class the vehicle is registered for (e.g. `"Car"`).
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub vehicle_color: Option<String>,
    #[serde(default)]
    pub plate_number: Option<String>,
    /// Average rider rating, zero when unrated.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub rating: f64,
    /// One of [`CAPTAIN_STATUSES`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Listing for Captain {
    const PATH: &'static str = "/api/captains";
    const KEY: &'static str = "captains";
    const NOUN: &'static str = "captains";

    fn id(&self) -> u64 {
        self.captain_id
    }
}

/// Per-service pricing a captain charges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptainRate {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub rate_id: u64,
    /// One of [`SERVICE_TYPES`].
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub rate_per_km: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub minimum_fare: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub waiting_time_rate: f64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Booking aggregates attached to a rider record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_bookings: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub completed_bookings: u64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_spent: f64,
}

/// A rider account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub user_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// One of [`USER_STATUSES`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: UserStatistics,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Listing for AppUser {
    const PATH: &'static str = "/api/users";
    const KEY: &'static str = "users";
    const NOUN: &'static str = "users";

    fn id(&self) -> u64 {
        self.user_id
    }
}

/// A trip request and its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub booking_id: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub captain_name: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    /// One of [`BOOKING_STATUSES`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub dropoff_address: Option<String>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub distance_km: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub estimated_fare: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub final_fare: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub app_commission: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub captain_earning: f64,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Listing for Booking {
    const PATH: &'static str = "/api/bookings";
    const KEY: &'static str = "bookings";
    const NOUN: &'static str = "bookings";

    fn id(&self) -> u64 {
        self.booking_id
    }
}

/// The platform's share of one completed booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub booking_id: u64,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub captain_name: Option<String>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub final_fare: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub app_commission: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub captain_earning: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Listing for Commission {
    const PATH: &'static str = "/api/financials/commissions";
    const KEY: &'static str = "commissions";
    const NOUN: &'static str = "commissions";

    fn id(&self) -> u64 {
        self.booking_id
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCounts {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub new_today: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptainCounts {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub pending: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub new_today: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingCounts {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub today: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub completed_today: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueTotals {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub today: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub commission_today: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub this_month: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub commission_this_month: f64,
}

/// Headline counters from `GET /api/dashboard/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: UserCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub captains: CaptainCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bookings: BookingCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: RevenueTotals,
}

/// One entry of the recent-activity feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// `booking`, `captain_registration` or `user_registration`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingsTrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub bookings: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueTrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub commission: f64,
}

/// Envelope of the `dashboard/charts/*-trend` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TrendResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub trend_data: Vec<T>,
}

impl<T> Default for TrendResponse<T> {
    fn default() -> Self {
        Self { trend_data: Vec::new() }
    }
}

/// Bookings per service class over the chart window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceShare {
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub distribution_data: Vec<ServiceShare>,
}

// =============================================================================
// FINANCIALS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialTotals {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_commission: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_captain_earnings: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub commission_percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodTotals {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub cash: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub instapay: f64,
}

/// Body of `GET /api/financials/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: FinancialTotals,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_methods: PaymentMethodTotals,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub transaction_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_commission: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub booking_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenueResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_revenue: Vec<DailyRevenue>,
}

/// Body of `GET /api/financials/export`.
///
/// Export rows stay untyped: the console only re-serializes them into the
/// downloaded file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub export_data: Vec<Value>,
    #[serde(default)]
    pub export_type: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_records: u64,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login. The API omits the email, so the console keeps the one
/// the admin typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub admin_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body carried by every non-success API response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Body of the captain and user `PUT .../status` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingStatusUpdate {
    pub status: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisputeResolution {
    pub resolution_notes: String,
}

/// Body of `PUT /api/captains/{id}/rates`; creates or replaces the rate for
/// one service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RateUpdate {
    pub service_type: String,
    pub rate_per_km: f64,
    pub minimum_fare: f64,
    pub waiting_time_rate: f64,
}

// =============================================================================
// STATUS VOCABULARY
// =============================================================================

/// A filter option: API value plus display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> StatusOption {
    StatusOption { value, label }
}

pub const CAPTAIN_STATUSES: &[StatusOption] = &[
    opt("Pending", "Pending"),
    opt("Active", "Active"),
    opt("OnHold", "On Hold"),
    opt("Deactivated", "Deactivated"),
];

pub const USER_STATUSES: &[StatusOption] = &[
    opt("Active", "Active"),
    opt("Deactivated", "Deactivated"),
    opt("Blocked", "Blocked"),
];

pub const BOOKING_STATUSES: &[StatusOption] = &[
    opt("Pending", "Pending"),
    opt("Accepted", "Accepted"),
    opt("EnRoute", "En Route"),
    opt("Arrived", "Arrived"),
    opt("Completed", "Completed"),
    opt("Cancelled", "Cancelled"),
    opt("Disputed", "Disputed"),
];

/// Services a captain can be priced for.
pub const SERVICE_TYPES: &[StatusOption] = &[
    opt("InsideCity", "Inside City"),
    opt("CrossCity", "Cross City"),
    opt("AirportDropoff", "Airport Drop-off"),
    opt("ScooterRide", "Scooter Ride"),
    opt("PackageDelivery", "Package Delivery"),
    opt("BookCaptain", "Book Captain"),
];

/// Display label for a status value, falling back to the raw value.
#[must_use]
pub fn status_label<'a>(options: &[StatusOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or(value, |o| o.label)
}
