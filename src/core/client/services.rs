use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Service;

/// Fetch all services in the cluster
pub async fn fetch_services(client: &Client) -> kube::Result<Vec<Service>> {
    let services: Api<Service> = Api::all(client.clone());
    let list = services.list(&ListParams::default()).await?;

    debug!("Discovered {} service(s)", list.items.len());
    Ok(list.items)
}

pub async fn fetch_service(client: &Client, namespace: &str, name: &str) -> kube::Result<Service> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let service = services.get(name).await?;

    debug!("Fetched service: {}/{}", namespace, name);
    Ok(service)
}

pub async fn create_service(client: &Client, namespace: &str, service: &Service) -> kube::Result<Service> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let created = services.create(&PostParams::default(), service).await?;

    debug!("Created service in namespace '{}'", namespace);
    Ok(created)
}

pub async fn delete_service(client: &Client, namespace: &str, name: &str) -> kube::Result<()> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    services.delete(name, &DeleteParams::default()).await?;

    debug!("Deleted service: {}/{}", namespace, name);
    Ok(())
}
