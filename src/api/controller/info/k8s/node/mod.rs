use axum::extract::{Path, State};
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::common::model::ItemsResponse;
use crate::domain::info::dto::views::NodeView;
use crate::errors::AppError;

pub struct InfoK8sNodeController;

impl InfoK8sNodeController {
    pub async fn list_k8s_nodes(State(state): State<AppState>) -> Result<Json<ItemsResponse<NodeView>>, AppError> {
        to_json(state.info_k8s_service.list_nodes().await)
    }

    pub async fn get_k8s_node(
        State(state): State<AppState>,
        Path(node_name): Path<String>,
    ) -> Result<Json<NodeView>, AppError> {
        to_json(state.info_k8s_service.get_node(node_name).await)
    }
}
