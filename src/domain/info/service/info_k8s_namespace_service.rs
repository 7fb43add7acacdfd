use validator::Validate;

use crate::core::client::kube_resources::{Namespace, ObjectMeta};
use crate::core::client::mappers::map_namespace_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::requests::CreateNamespaceRequest;
use crate::domain::info::dto::views::NamespaceView;
use crate::errors::AppError;

pub async fn list_namespaces(ctx: &ServiceContext) -> Result<ItemsResponse<NamespaceView>, AppError> {
    let namespaces = ctx.cluster.list_namespaces().await?;
    Ok(namespaces.iter().map(map_namespace_to_view).collect())
}

pub async fn get_namespace(ctx: &ServiceContext, name: String) -> Result<NamespaceView, AppError> {
    let namespace = ctx.cluster.get_namespace(&name).await?;
    Ok(map_namespace_to_view(&namespace))
}

pub async fn create_namespace(ctx: &ServiceContext, req: CreateNamespaceRequest) -> Result<NamespaceView, AppError> {
    req.validate()?;
    let namespace = Namespace {
        metadata: ObjectMeta {
            name: Some(req.name),
            labels: req.labels,
            ..ObjectMeta::default()
        },
        ..Namespace::default()
    };
    let created = ctx.cluster.create_namespace(&namespace).await?;
    Ok(map_namespace_to_view(&created))
}

pub async fn delete_namespace(ctx: &ServiceContext, name: String) -> Result<(), AppError> {
    Ok(ctx.cluster.delete_namespace(&name).await?)
}
