use futures::try_join;

use crate::core::client::kube_resources::{Node, Pod};
use crate::core::client::mappers::{map_version_to_view, node_ready};
use crate::domain::common::service::ServiceContext;
use crate::domain::info::dto::views::{ClusterHealthView, ClusterInfoView, ClusterVersionView, NodeHealth, PodHealth};
use crate::errors::AppError;

pub const CLUSTER_NAME: &str = "default-cluster";
const HEALTHY: &str = "Healthy";
const DEGRADED: &str = "Degraded";

fn ready_nodes(nodes: &[Node]) -> usize {
    nodes.iter().filter(|n| node_ready(n) == Some(true)).count()
}

/// Node and pod health counts. Any node that is not Ready degrades the cluster.
pub fn summarize_health(nodes: &[Node], pods: &[Pod]) -> ClusterHealthView {
    let healthy = ready_nodes(nodes);
    let running = pods
        .iter()
        .filter(|p| p.status.as_ref().and_then(|s| s.phase.as_deref()) == Some("Running"))
        .count();

    ClusterHealthView {
        nodes: NodeHealth {
            total: nodes.len(),
            healthy,
        },
        pods: PodHealth {
            total: pods.len(),
            running,
            failed: pods.len() - running,
        },
        overall: if healthy < nodes.len() { DEGRADED } else { HEALTHY }.to_string(),
    }
}

pub async fn get_cluster_info(ctx: &ServiceContext) -> Result<ClusterInfoView, AppError> {
    let (version, nodes) = try_join!(ctx.cluster.server_version(), ctx.cluster.list_nodes())?;
    let healthy = ready_nodes(&nodes) == nodes.len();

    Ok(ClusterInfoView {
        name: CLUSTER_NAME.to_string(),
        version: version.git_version,
        nodes: nodes.len(),
        healthy,
        status: if healthy { HEALTHY } else { DEGRADED }.to_string(),
    })
}

pub async fn get_cluster_health(ctx: &ServiceContext) -> Result<ClusterHealthView, AppError> {
    let (nodes, pods) = try_join!(ctx.cluster.list_nodes(), ctx.cluster.list_pods())?;
    Ok(summarize_health(&nodes, &pods))
}

pub async fn get_cluster_version(ctx: &ServiceContext) -> Result<ClusterVersionView, AppError> {
    let version = ctx.cluster.server_version().await?;
    Ok(map_version_to_view(&version))
}
