use crate::core::client::mappers::map_node_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::views::NodeView;
use crate::errors::AppError;

pub async fn list_nodes(ctx: &ServiceContext) -> Result<ItemsResponse<NodeView>, AppError> {
    let nodes = ctx.cluster.list_nodes().await?;
    Ok(nodes.iter().map(map_node_to_view).collect())
}

pub async fn get_node(ctx: &ServiceContext, name: String) -> Result<NodeView, AppError> {
    let node = ctx.cluster.get_node(&name).await?;
    Ok(map_node_to_view(&node))
}
