//! API route declarations (e.g., /api/*)

pub mod auth_routes;
pub mod info_routes;
pub mod metrics_routes;
