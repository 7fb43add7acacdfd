use axum::extract::{Path, State};
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::metric::dto::{MetricsListResponse, NodeMetricsRecord};
use crate::errors::AppError;

pub struct K8sNodeMetricsController;

impl K8sNodeMetricsController {
    pub async fn get_metric_k8s_nodes(
        State(state): State<AppState>,
    ) -> Result<Json<MetricsListResponse<NodeMetricsRecord>>, AppError> {
        to_json(state.metric_service.list_node_metrics().await)
    }

    pub async fn get_metric_k8s_node(
        State(state): State<AppState>,
        Path(node_name): Path<String>,
    ) -> Result<Json<NodeMetricsRecord>, AppError> {
        to_json(state.metric_service.get_node_metrics(node_name).await)
    }
}
