use axum::extract::{Path, State};
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::metric::dto::{MetricsListResponse, PodMetricsRecord};
use crate::errors::AppError;

pub struct K8sPodMetricsController;

impl K8sPodMetricsController {
    pub async fn get_metric_k8s_pods(
        State(state): State<AppState>,
    ) -> Result<Json<MetricsListResponse<PodMetricsRecord>>, AppError> {
        to_json(state.metric_service.list_pod_metrics(None).await)
    }

    pub async fn get_metric_k8s_namespace_pods(
        State(state): State<AppState>,
        Path(namespace): Path<String>,
    ) -> Result<Json<MetricsListResponse<PodMetricsRecord>>, AppError> {
        to_json(state.metric_service.list_pod_metrics(Some(namespace)).await)
    }

    pub async fn get_metric_k8s_pod(
        State(state): State<AppState>,
        Path((namespace, pod_name)): Path<(String, String)>,
    ) -> Result<Json<PodMetricsRecord>, AppError> {
        to_json(state.metric_service.get_pod_metrics(namespace, pod_name).await)
    }
}
