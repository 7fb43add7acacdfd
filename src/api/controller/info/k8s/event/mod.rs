use axum::extract::{Path, State};
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::views::EventView;
use crate::errors::AppError;

pub struct InfoK8sEventController;

impl InfoK8sEventController {
    pub async fn list_k8s_events(State(state): State<AppState>) -> Result<Json<ItemsResponse<EventView>>, AppError> {
        to_json(state.info_k8s_service.list_events(None).await)
    }

    pub async fn list_k8s_namespace_events(
        State(state): State<AppState>,
        Path(namespace): Path<String>,
    ) -> Result<Json<ItemsResponse<EventView>>, AppError> {
        to_json(state.info_k8s_service.list_events(Some(namespace)).await)
    }
}
