//! Pure helpers shared by pages and components.
//!
//! DESIGN
//! ======
//! Formatting, routing and chart geometry stay free of signals so they can be
//! unit-tested natively; `auth` and `download` hold the thin browser glue.

pub mod auth;
pub mod chart;
pub mod download;
pub mod format;
pub mod routing;
