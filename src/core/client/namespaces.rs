use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Namespace;

/// Fetch all namespaces in the cluster
pub async fn fetch_namespaces(client: &Client) -> kube::Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;

    debug!("Discovered {} namespace(s)", list.items.len());
    Ok(list.items)
}

pub async fn fetch_namespace(client: &Client, name: &str) -> kube::Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace = namespaces.get(name).await?;

    debug!("Fetched namespace: {}", name);
    Ok(namespace)
}

pub async fn create_namespace(client: &Client, namespace: &Namespace) -> kube::Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let created = namespaces.create(&PostParams::default(), namespace).await?;

    debug!("Created namespace: {}", created.metadata.name.as_deref().unwrap_or_default());
    Ok(created)
}

/// Namespace deletion is asynchronous on the server; this returns once it is accepted
pub async fn delete_namespace(client: &Client, name: &str) -> kube::Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces.delete(name, &DeleteParams::default()).await?;

    debug!("Deleted namespace: {}", name);
    Ok(())
}
