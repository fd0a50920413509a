//! Dashboard sections and their combined load cycle.
//!
//! All five sections load concurrently as one round. Each failing section
//! adds its own message to the banner; successful sections still update.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use wire::{
    Activity, ActivityFeed, ApiError, BookingsTrendPoint, DashboardOverview, DistributionResponse,
    RevenueTrendPoint, ServiceShare, TrendResponse,
};

use super::paged::FetchOutcome;

/// Raw results of one load round.
#[derive(Clone, Debug)]
pub struct DashboardResults {
    pub overview: Result<DashboardOverview, ApiError>,
    pub activity: Result<ActivityFeed, ApiError>,
    pub bookings_trend: Result<TrendResponse<BookingsTrendPoint>, ApiError>,
    pub revenue_trend: Result<TrendResponse<RevenueTrendPoint>, ApiError>,
    pub distribution: Result<DistributionResponse, ApiError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub overview: DashboardOverview,
    pub activities: Vec<Activity>,
    pub bookings_trend: Vec<BookingsTrendPoint>,
    pub revenue_trend: Vec<RevenueTrendPoint>,
    pub distribution: Vec<ServiceShare>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl DashboardState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    pub fn finish(&mut self, seq: u64, results: DashboardResults) -> FetchOutcome {
        if seq != self.seq {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        let mut errors = Vec::new();

        match results.overview {
            Ok(v) => self.overview = v,
            Err(e) => errors.push(e.user_message("fetch dashboard overview")),
        }
        match results.activity {
            Ok(v) => self.activities = v.activities,
            Err(e) => errors.push(e.user_message("fetch recent activity")),
        }
        match results.bookings_trend {
            Ok(v) => self.bookings_trend = v.trend_data,
            Err(e) => errors.push(e.user_message("fetch bookings trend")),
        }
        match results.revenue_trend {
            Ok(v) => self.revenue_trend = v.trend_data,
            Err(e) => errors.push(e.user_message("fetch revenue trend")),
        }
        match results.distribution {
            Ok(v) => self.distribution = v.distribution_data,
            Err(e) => errors.push(e.user_message("fetch service distribution")),
        }

        self.error = if errors.is_empty() { None } else { Some(errors.join(". ")) };
        FetchOutcome::Applied
    }

    /// Sum of bookings across the service distribution.
    pub fn distribution_total(&self) -> u64 {
        self.distribution.iter().map(|s| s.count).sum()
    }
}
