use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use crate::api::dto::info_dto::PodLogQuery;
use crate::api::middleware::access_gate::AuthenticatedUser;
use crate::api::util::json::{to_json, to_no_content};
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::views::PodView;
use crate::errors::AppError;

pub struct InfoK8sPodController;

impl InfoK8sPodController {
    pub async fn list_k8s_pods(State(state): State<AppState>) -> Result<Json<ItemsResponse<PodView>>, AppError> {
        to_json(state.info_k8s_service.list_pods().await)
    }

    pub async fn get_k8s_pod(
        State(state): State<AppState>,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<Json<PodView>, AppError> {
        to_json(state.info_k8s_service.get_pod(namespace, name).await)
    }

    pub async fn delete_k8s_pod(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<StatusCode, AppError> {
        info!("User '{}' deleting pod {}/{}", user.username, namespace, name);
        to_no_content(state.info_k8s_service.delete_pod(namespace, name).await)
    }

    pub async fn get_k8s_pod_logs(
        State(state): State<AppState>,
        Path((namespace, name)): Path<(String, String)>,
        query: Result<Query<PodLogQuery>, QueryRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Query(q) = query.map_err(|_| AppError::Malformed("tail must be a number".to_string()))?;
        let logs = state
            .info_k8s_service
            .get_pod_logs(namespace, name, q.tail_lines())
            .await?;
        Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], logs))
    }
}
