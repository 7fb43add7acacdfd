use axum::extract::State;
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::info::dto::views::{ClusterHealthView, ClusterInfoView, ClusterVersionView};
use crate::errors::AppError;

pub struct InfoK8sClusterController;

impl InfoK8sClusterController {
    pub async fn get_k8s_cluster_info(State(state): State<AppState>) -> Result<Json<ClusterInfoView>, AppError> {
        to_json(state.info_k8s_service.get_cluster_info().await)
    }

    pub async fn get_k8s_cluster_health(State(state): State<AppState>) -> Result<Json<ClusterHealthView>, AppError> {
        to_json(state.info_k8s_service.get_cluster_health().await)
    }

    pub async fn get_k8s_cluster_version(State(state): State<AppState>) -> Result<Json<ClusterVersionView>, AppError> {
        to_json(state.info_k8s_service.get_cluster_version().await)
    }
}
