use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::api::middleware::access_gate::AuthenticatedUser;
use crate::api::util::json::{parse_body, to_created, to_json, to_no_content};
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::requests::CreateNamespaceRequest;
use crate::domain::info::dto::views::NamespaceView;
use crate::errors::AppError;

pub struct InfoK8sNamespaceController;

impl InfoK8sNamespaceController {
    pub async fn list_k8s_namespaces(
        State(state): State<AppState>,
    ) -> Result<Json<ItemsResponse<NamespaceView>>, AppError> {
        to_json(state.info_k8s_service.list_namespaces().await)
    }

    pub async fn get_k8s_namespace(
        State(state): State<AppState>,
        Path(name): Path<String>,
    ) -> Result<Json<NamespaceView>, AppError> {
        to_json(state.info_k8s_service.get_namespace(name).await)
    }

    pub async fn create_k8s_namespace(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        payload: Result<Json<CreateNamespaceRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<NamespaceView>), AppError> {
        let req = parse_body(payload)?;
        info!("User '{}' creating namespace {}", user.username, req.name);
        to_created(state.info_k8s_service.create_namespace(req).await)
    }

    pub async fn delete_k8s_namespace(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        Path(name): Path<String>,
    ) -> Result<StatusCode, AppError> {
        info!("User '{}' deleting namespace {}", user.username, name);
        to_no_content(state.info_k8s_service.delete_namespace(name).await)
    }
}
