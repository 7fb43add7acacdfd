//! Backend gateway for the Kubernetes dashboard: session-gated access to
//! cluster resources and normalized node/pod metrics.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
