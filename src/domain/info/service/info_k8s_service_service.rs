use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ServiceSpec;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use validator::Validate;

use crate::core::client::kube_resources::{ObjectMeta, Service, ServicePort};
use crate::core::client::mappers::map_service_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::requests::CreateServiceRequest;
use crate::domain::info::dto::views::ServiceView;
use crate::domain::info::service::info_k8s_deployment_service::APP_LABEL;
use crate::errors::AppError;

/// ClusterIP/TCP service in front of the pods labelled `app=<name>`.
pub fn build_service(req: &CreateServiceRequest) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(req.name.clone()),
            namespace: Some(req.namespace.clone()),
            ..ObjectMeta::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(BTreeMap::from([(APP_LABEL.to_string(), req.name.clone())])),
            ports: Some(vec![ServicePort {
                port: req.port,
                target_port: Some(IntOrString::Int(req.target_port)),
                protocol: Some("TCP".to_string()),
                ..ServicePort::default()
            }]),
            type_: Some("ClusterIP".to_string()),
            ..ServiceSpec::default()
        }),
        ..Service::default()
    }
}

pub async fn list_services(ctx: &ServiceContext) -> Result<ItemsResponse<ServiceView>, AppError> {
    let services = ctx.cluster.list_services().await?;
    Ok(services.iter().map(map_service_to_view).collect())
}

pub async fn get_service(ctx: &ServiceContext, namespace: String, name: String) -> Result<ServiceView, AppError> {
    let service = ctx.cluster.get_service(&namespace, &name).await?;
    Ok(map_service_to_view(&service))
}

pub async fn create_service(ctx: &ServiceContext, req: CreateServiceRequest) -> Result<ServiceView, AppError> {
    req.validate()?;
    let created = ctx.cluster.create_service(&req.namespace, &build_service(&req)).await?;
    Ok(map_service_to_view(&created))
}

pub async fn delete_service(ctx: &ServiceContext, namespace: String, name: String) -> Result<(), AppError> {
    Ok(ctx.cluster.delete_service(&namespace, &name).await?)
}
