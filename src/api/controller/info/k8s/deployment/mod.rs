use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::api::middleware::access_gate::AuthenticatedUser;
use crate::api::util::json::{parse_body, to_created, to_json, to_no_content};
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::requests::{CreateDeploymentRequest, UpdateDeploymentRequest};
use crate::domain::info::dto::views::DeploymentView;
use crate::errors::AppError;

pub struct InfoK8sDeploymentController;

impl InfoK8sDeploymentController {
    pub async fn list_k8s_deployments(
        State(state): State<AppState>,
    ) -> Result<Json<ItemsResponse<DeploymentView>>, AppError> {
        to_json(state.info_k8s_service.list_deployments().await)
    }

    pub async fn get_k8s_deployment(
        State(state): State<AppState>,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<Json<DeploymentView>, AppError> {
        to_json(state.info_k8s_service.get_deployment(namespace, name).await)
    }

    pub async fn create_k8s_deployment(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        payload: Result<Json<CreateDeploymentRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<DeploymentView>), AppError> {
        let req = parse_body(payload)?;
        info!("User '{}' creating deployment {}/{}", user.username, req.namespace, req.name);
        to_created(state.info_k8s_service.create_deployment(req).await)
    }

    pub async fn update_k8s_deployment(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        Path((namespace, name)): Path<(String, String)>,
        payload: Result<Json<UpdateDeploymentRequest>, JsonRejection>,
    ) -> Result<Json<DeploymentView>, AppError> {
        let req = parse_body(payload)?;
        info!("User '{}' updating deployment {}/{}", user.username, namespace, name);
        to_json(
            state
                .info_k8s_service
                .update_deployment(namespace, name, req)
                .await,
        )
    }

    pub async fn delete_k8s_deployment(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<StatusCode, AppError> {
        info!("User '{}' deleting deployment {}/{}", user.username, namespace, name);
        to_no_content(state.info_k8s_service.delete_deployment(namespace, name).await)
    }
}
