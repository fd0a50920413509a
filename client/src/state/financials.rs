//! Financial overview, daily revenue and export state.
//!
//! The commission table is a separate `PagedResource<Commission>`; this
//! module holds the aggregates loaded alongside it and the export status.

#[cfg(test)]
#[path = "financials_test.rs"]
mod financials_test;

use wire::{ApiError, DailyRevenue, DailyRevenueResponse, ExportKind, FinancialOverview};

use super::paged::FetchOutcome;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinancialsState {
    pub overview: FinancialOverview,
    pub daily_revenue: Vec<DailyRevenue>,
    pub loading: bool,
    pub error: Option<String>,
    /// Export currently in flight.
    pub exporting: Option<ExportKind>,
    /// Result line of the last export.
    pub export_message: Option<String>,
    seq: u64,
}

impl FinancialsState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    pub fn finish(
        &mut self,
        seq: u64,
        overview: Result<FinancialOverview, ApiError>,
        daily: Result<DailyRevenueResponse, ApiError>,
    ) -> FetchOutcome {
        if seq != self.seq {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        let mut errors = Vec::new();
        match overview {
            Ok(v) => self.overview = v,
            Err(e) => errors.push(e.user_message("fetch financial overview")),
        }
        match daily {
            Ok(v) => self.daily_revenue = v.daily_revenue,
            Err(e) => errors.push(e.user_message("fetch daily revenue")),
        }
        self.error = if errors.is_empty() { None } else { Some(errors.join(". ")) };
        FetchOutcome::Applied
    }

    /// Start an export unless one is already running.
    pub fn begin_export(&mut self, kind: ExportKind) -> bool {
        if self.exporting.is_some() {
            return false;
        }
        self.exporting = Some(kind);
        self.export_message = None;
        true
    }

    pub fn finish_export(&mut self, result: Result<String, String>) {
        self.exporting = None;
        self.export_message = Some(match result {
            Ok(summary) => summary,
            Err(message) => message,
        });
    }
}
