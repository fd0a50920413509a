//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and error mapping, `listing` drives the
//! shared paged-resource fetch and mutation cycle for list views.

pub mod api;
pub mod listing;
