//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `paged`, page aggregates)
//! and kept free of I/O so transitions are testable without a browser.

pub mod auth;
pub mod dashboard;
pub mod financials;
pub mod paged;
pub mod session;
pub mod ui;
