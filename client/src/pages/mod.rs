//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and load cycle and delegates
//! rendering details to `components`.

pub mod bookings;
pub mod captains;
pub mod dashboard;
pub mod financials;
pub mod login;
pub mod users;
