use crate::core::client::mappers::map_pod_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::views::PodView;
use crate::errors::AppError;

pub const DEFAULT_LOG_TAIL_LINES: i64 = 100;

pub async fn list_pods(ctx: &ServiceContext) -> Result<ItemsResponse<PodView>, AppError> {
    let pods = ctx.cluster.list_pods().await?;
    Ok(pods.iter().map(map_pod_to_view).collect())
}

pub async fn get_pod(ctx: &ServiceContext, namespace: String, name: String) -> Result<PodView, AppError> {
    let pod = ctx.cluster.get_pod(&namespace, &name).await?;
    Ok(map_pod_to_view(&pod))
}

pub async fn delete_pod(ctx: &ServiceContext, namespace: String, name: String) -> Result<(), AppError> {
    Ok(ctx.cluster.delete_pod(&namespace, &name).await?)
}

pub async fn get_pod_logs(
    ctx: &ServiceContext,
    namespace: String,
    name: String,
    tail_lines: i64,
) -> Result<String, AppError> {
    Ok(ctx.cluster.pod_logs(&namespace, &name, tail_lines).await?)
}
