use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Deployment;

/// Fetch all deployments in the cluster
pub async fn fetch_deployments(client: &Client) -> kube::Result<Vec<Deployment>> {
    let deployments: Api<Deployment> = Api::all(client.clone());
    let list = deployments.list(&ListParams::default()).await?;

    debug!("Discovered {} deployment(s)", list.items.len());
    Ok(list.items)
}

pub async fn fetch_deployment(client: &Client, namespace: &str, name: &str) -> kube::Result<Deployment> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let deployment = deployments.get(name).await?;

    debug!("Fetched deployment: {}/{}", namespace, name);
    Ok(deployment)
}

pub async fn create_deployment(
    client: &Client,
    namespace: &str,
    deployment: &Deployment,
) -> kube::Result<Deployment> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let created = deployments.create(&PostParams::default(), deployment).await?;

    debug!("Created deployment in namespace '{}'", namespace);
    Ok(created)
}

/// Replace a deployment; `deployment` must carry the current resourceVersion
pub async fn replace_deployment(
    client: &Client,
    namespace: &str,
    name: &str,
    deployment: &Deployment,
) -> kube::Result<Deployment> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let updated = deployments.replace(name, &PostParams::default(), deployment).await?;

    debug!("Replaced deployment: {}/{}", namespace, name);
    Ok(updated)
}

pub async fn delete_deployment(client: &Client, namespace: &str, name: &str) -> kube::Result<()> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    deployments.delete(name, &DeleteParams::default()).await?;

    debug!("Deleted deployment: {}/{}", namespace, name);
    Ok(())
}
