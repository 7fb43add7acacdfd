//! Cluster resource routes (e.g., /api/pods/*)

use axum::routing::get;
use axum::Router;

use crate::api::controller::info::k8s::cluster::InfoK8sClusterController;
use crate::api::controller::info::k8s::deployment::InfoK8sDeploymentController;
use crate::api::controller::info::k8s::event::InfoK8sEventController;
use crate::api::controller::info::k8s::namespace::InfoK8sNamespaceController;
use crate::api::controller::info::k8s::node::InfoK8sNodeController;
use crate::api::controller::info::k8s::pod::InfoK8sPodController;
use crate::api::controller::info::k8s::service::InfoK8sServiceController;
use crate::api::controller::metric::k8s::node::K8sNodeMetricsController;
use crate::app_state::AppState;

pub fn info_routes() -> Router<AppState> {
    Router::new()
        // Pods
        .route("/pods", get(InfoK8sPodController::list_k8s_pods))
        .route(
            "/pods/{namespace}/{name}",
            get(InfoK8sPodController::get_k8s_pod).delete(InfoK8sPodController::delete_k8s_pod),
        )
        .route("/pods/{namespace}/{name}/logs", get(InfoK8sPodController::get_k8s_pod_logs))

        // Deployments
        .route(
            "/deployments",
            get(InfoK8sDeploymentController::list_k8s_deployments)
                .post(InfoK8sDeploymentController::create_k8s_deployment),
        )
        .route(
            "/deployments/{namespace}/{name}",
            get(InfoK8sDeploymentController::get_k8s_deployment)
                .put(InfoK8sDeploymentController::update_k8s_deployment)
                .delete(InfoK8sDeploymentController::delete_k8s_deployment),
        )

        // Services
        .route(
            "/services",
            get(InfoK8sServiceController::list_k8s_services).post(InfoK8sServiceController::create_k8s_service),
        )
        .route(
            "/services/{namespace}/{name}",
            get(InfoK8sServiceController::get_k8s_service).delete(InfoK8sServiceController::delete_k8s_service),
        )

        // Namespaces
        .route(
            "/namespaces",
            get(InfoK8sNamespaceController::list_k8s_namespaces)
                .post(InfoK8sNamespaceController::create_k8s_namespace),
        )
        .route(
            "/namespaces/{name}",
            get(InfoK8sNamespaceController::get_k8s_namespace)
                .delete(InfoK8sNamespaceController::delete_k8s_namespace),
        )

        // Nodes
        .route("/nodes", get(InfoK8sNodeController::list_k8s_nodes))
        .route("/nodes/{name}", get(InfoK8sNodeController::get_k8s_node))
        .route("/nodes/{name}/metrics", get(K8sNodeMetricsController::get_metric_k8s_node))

        // Events
        .route("/events", get(InfoK8sEventController::list_k8s_events))
        .route("/events/{namespace}", get(InfoK8sEventController::list_k8s_namespace_events))

        // Cluster
        .route("/cluster/info", get(InfoK8sClusterController::get_k8s_cluster_info))
        .route("/cluster/health", get(InfoK8sClusterController::get_k8s_cluster_health))
        .route("/cluster/version", get(InfoK8sClusterController::get_k8s_cluster_version))
}
