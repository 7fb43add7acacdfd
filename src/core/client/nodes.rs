use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Node;

fn node_api(client: &Client) -> Api<Node> {
    Api::all(client.clone())
}

/// All nodes, including cordoned and NotReady ones
pub async fn fetch_nodes(client: &Client) -> kube::Result<Vec<Node>> {
    let list = node_api(client).list(&ListParams::default()).await?;

    debug!(count = list.items.len(), "Listed nodes");
    Ok(list.items)
}

/// One node by name; a 404 surfaces as `kube::Error::Api` with code 404
pub async fn fetch_node_by_name(client: &Client, name: &str) -> kube::Result<Node> {
    let node = node_api(client).get(name).await?;

    debug!(node = name, "Fetched node");
    Ok(node)
}
