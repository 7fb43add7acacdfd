use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Event;

/// Fetch events, cluster-wide or restricted to one namespace
pub async fn fetch_events(client: &Client, namespace: Option<&str>) -> kube::Result<Vec<Event>> {
    let events: Api<Event> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };
    let list = events.list(&ListParams::default()).await?;

    debug!("Discovered {} event(s) in {}", list.items.len(), namespace.unwrap_or("all namespaces"));
    Ok(list.items)
}
