use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::{PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use validator::Validate;

use crate::core::client::kube_resources::{ContainerPort, Deployment, K8sContainer, ObjectMeta};
use crate::core::client::mappers::map_deployment_to_view;
use crate::domain::common::model::ItemsResponse;
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::requests::{CreateDeploymentRequest, UpdateDeploymentRequest};
use crate::domain::info::dto::views::DeploymentView;
use crate::errors::AppError;

pub const APP_LABEL: &str = "app";

/// Single-container deployment selected by `app=<name>`.
pub fn build_deployment(req: &CreateDeploymentRequest) -> Deployment {
    let labels = BTreeMap::from([(APP_LABEL.to_string(), req.name.clone())]);

    Deployment {
        metadata: ObjectMeta {
            name: Some(req.name.clone()),
            namespace: Some(req.namespace.clone()),
            ..ObjectMeta::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(req.replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..LabelSelector::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..ObjectMeta::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![K8sContainer {
                        name: req.name.clone(),
                        image: Some(req.image.clone()),
                        ports: Some(vec![ContainerPort {
                            container_port: req.port,
                            ..ContainerPort::default()
                        }]),
                        ..K8sContainer::default()
                    }],
                    ..PodSpec::default()
                }),
            },
            ..DeploymentSpec::default()
        }),
        ..Deployment::default()
    }
}

/// Apply a partial update in place. Returns false when the deployment has no
/// container to carry a new image.
pub fn apply_update(deployment: &mut Deployment, req: &UpdateDeploymentRequest) -> bool {
    let Some(spec) = deployment.spec.as_mut() else {
        return false;
    };

    if let Some(image) = req.image() {
        let first = spec
            .template
            .spec
            .as_mut()
            .and_then(|pod| pod.containers.first_mut());
        match first {
            Some(container) => container.image = Some(image.to_string()),
            None => return false,
        }
    }
    if let Some(replicas) = req.replicas() {
        spec.replicas = Some(replicas);
    }
    true
}

pub async fn list_deployments(ctx: &ServiceContext) -> Result<ItemsResponse<DeploymentView>, AppError> {
    let deployments = ctx.cluster.list_deployments().await?;
    Ok(deployments.iter().map(map_deployment_to_view).collect())
}

pub async fn get_deployment(ctx: &ServiceContext, namespace: String, name: String) -> Result<DeploymentView, AppError> {
    let deployment = ctx.cluster.get_deployment(&namespace, &name).await?;
    Ok(map_deployment_to_view(&deployment))
}

pub async fn create_deployment(ctx: &ServiceContext, req: CreateDeploymentRequest) -> Result<DeploymentView, AppError> {
    req.validate()?;
    let created = ctx
        .cluster
        .create_deployment(&req.namespace, &build_deployment(&req))
        .await?;
    Ok(map_deployment_to_view(&created))
}

pub async fn update_deployment(
    ctx: &ServiceContext,
    namespace: String,
    name: String,
    req: UpdateDeploymentRequest,
) -> Result<DeploymentView, AppError> {
    let mut deployment = ctx.cluster.get_deployment(&namespace, &name).await?;

    if !apply_update(&mut deployment, &req) {
        return Err(AppError::Malformed(format!(
            "deployment '{namespace}/{name}' has no container to update"
        )));
    }

    let updated = ctx.cluster.replace_deployment(&namespace, &name, &deployment).await?;
    Ok(map_deployment_to_view(&updated))
}

pub async fn delete_deployment(ctx: &ServiceContext, namespace: String, name: String) -> Result<(), AppError> {
    Ok(ctx.cluster.delete_deployment(&namespace, &name).await?)
}
