//! Shared wire model for the ride-booking admin REST API.
//!
//! This crate owns the JSON representation consumed by the `client` console
//! and the paths forwarded by `server`. It performs no I/O: records, listing
//! envelopes, endpoint builders and the error taxonomy live here so both
//! sides agree on one schema.
//!
//! DESIGN
//! ======
//! The API owns its vocabulary, so statuses stay strings on records and every
//! field is treated as optional. Numeric fields decode `null`/missing values
//! to zero via [`de`] so views can format them without guarding.

pub mod de;
pub mod endpoints;
pub mod error;
pub mod types;

pub use endpoints::{CaptainAction, ExportKind, ListQuery};
pub use error::ApiError;
pub use types::*;
