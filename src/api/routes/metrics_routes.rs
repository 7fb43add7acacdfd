//! Metrics routes (e.g., /api/metrics/*)

use axum::{routing::get, Router};

use crate::api::controller::metric::k8s::node::K8sNodeMetricsController;
use crate::api::controller::metric::k8s::pod::K8sPodMetricsController;
use crate::app_state::AppState;

/// Build the router for metrics endpoints under /api/metrics
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        // Nodes
        .route("/nodes", get(K8sNodeMetricsController::get_metric_k8s_nodes))

        // Pods
        .route("/pods", get(K8sPodMetricsController::get_metric_k8s_pods))
        .route("/pods/{namespace}", get(K8sPodMetricsController::get_metric_k8s_namespace_pods))
        .route("/pods/{namespace}/{name}", get(K8sPodMetricsController::get_metric_k8s_pod))
}
