use crate::core::client::mappers::map_event_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::views::EventView;
use crate::errors::AppError;

/// Events cluster-wide, or for one namespace when given.
pub async fn list_events(ctx: &ServiceContext, namespace: Option<String>) -> Result<ItemsResponse<EventView>, AppError> {
    let events = ctx.cluster.list_events(namespace.as_deref()).await?;
    Ok(events.iter().map(map_event_to_view).collect())
}
