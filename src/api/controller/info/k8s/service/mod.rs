use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::api::middleware::access_gate::AuthenticatedUser;
use crate::api::util::json::{parse_body, to_created, to_json, to_no_content};
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::requests::CreateServiceRequest;
use crate::domain::info::dto::views::ServiceView;
use crate::errors::AppError;

pub struct InfoK8sServiceController;

impl InfoK8sServiceController {
    pub async fn list_k8s_services(State(state): State<AppState>) -> Result<Json<ItemsResponse<ServiceView>>, AppError> {
        to_json(state.info_k8s_service.list_services().await)
    }

    pub async fn get_k8s_service(
        State(state): State<AppState>,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<Json<ServiceView>, AppError> {
        to_json(state.info_k8s_service.get_service(namespace, name).await)
    }

    pub async fn create_k8s_service(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        payload: Result<Json<CreateServiceRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ServiceView>), AppError> {
        let req = parse_body(payload)?;
        info!("User '{}' creating service {}/{}", user.username, req.namespace, req.name);
        to_created(state.info_k8s_service.create_service(req).await)
    }

    pub async fn delete_k8s_service(
        State(state): State<AppState>,
        user: AuthenticatedUser,
        Path((namespace, name)): Path<(String, String)>,
    ) -> Result<StatusCode, AppError> {
        info!("User '{}' deleting service {}/{}", user.username, namespace, name);
        to_no_content(state.info_k8s_service.delete_service(namespace, name).await)
    }
}
