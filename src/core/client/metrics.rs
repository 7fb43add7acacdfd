use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::{NodeMetrics, PodMetrics};

/// Fetch the current usage sample for one node from metrics.k8s.io
pub async fn fetch_node_metrics(client: &Client, node_name: &str) -> kube::Result<NodeMetrics> {
    let api: Api<NodeMetrics> = Api::all(client.clone());
    let sample = api.get(node_name).await?;

    debug!("Fetched node metrics: {}", node_name);
    Ok(sample)
}

pub async fn fetch_all_node_metrics(client: &Client) -> kube::Result<Vec<NodeMetrics>> {
    let api: Api<NodeMetrics> = Api::all(client.clone());
    let list = api.list(&ListParams::default()).await?;

    debug!("Discovered {} node metrics sample(s)", list.items.len());
    Ok(list.items)
}

pub async fn fetch_pod_metrics(client: &Client, namespace: &str, pod_name: &str) -> kube::Result<PodMetrics> {
    let api: Api<PodMetrics> = Api::namespaced(client.clone(), namespace);
    let sample = api.get(pod_name).await?;

    debug!("Fetched pod metrics: {}/{}", namespace, pod_name);
    Ok(sample)
}

/// Fetch pod samples, cluster-wide or restricted to one namespace
pub async fn fetch_all_pod_metrics(client: &Client, namespace: Option<&str>) -> kube::Result<Vec<PodMetrics>> {
    let api: Api<PodMetrics> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };
    let list = api.list(&ListParams::default()).await?;

    debug!("Discovered {} pod metrics sample(s)", list.items.len());
    Ok(list.items)
}
