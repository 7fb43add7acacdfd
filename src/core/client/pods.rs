use kube::api::{DeleteParams, ListParams, LogParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Pod;

/// Fetch all pods in the cluster
pub async fn fetch_pods(client: &Client) -> kube::Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::all(client.clone());
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s)", pod_list.items.len());
    Ok(pod_list.items)
}

/// Fetch a single pod by name and namespace
pub async fn fetch_pod_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    pod_name: &str,
) -> kube::Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod = pods.get(pod_name).await?;

    debug!("Fetched pod: {}/{}", namespace, pod_name);
    Ok(pod)
}

pub async fn delete_pod(client: &Client, namespace: &str, pod_name: &str) -> kube::Result<()> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    pods.delete(pod_name, &DeleteParams::default()).await?;

    debug!("Deleted pod: {}/{}", namespace, pod_name);
    Ok(())
}

/// Fetch the last `tail_lines` lines of the pod's default container log
pub async fn fetch_pod_logs(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    tail_lines: i64,
) -> kube::Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let params = LogParams {
        tail_lines: Some(tail_lines),
        ..LogParams::default()
    };
    let logs = pods.logs(pod_name, &params).await?;

    debug!("Fetched {} byte(s) of logs for pod {}/{}", logs.len(), namespace, pod_name);
    Ok(logs)
}
