use std::collections::HashMap;

use chrono::Utc;
use futures::future::join;
use tracing::{debug, warn};

use crate::domain::common::service::ServiceContext;
use crate::domain::metric::dto::{MetricsListResponse, NodeMetricsRecord, PodMetricsRecord};
use crate::domain::metric::normalizer::{
    normalize_node, normalize_pod, unavailable_node, unavailable_pod, NodeCapacity,
};
use crate::errors::AppError;

/// Usage for one node, with utilization against its capacity.
///
/// A missing node is an error; a missing or broken metrics backend is not.
pub async fn get_node_metrics(ctx: &ServiceContext, node_name: String) -> Result<NodeMetricsRecord, AppError> {
    let node = ctx.cluster.get_node(&node_name).await?;

    let Some(collector) = ctx.collector() else {
        debug!("Metrics collection disabled; node {} reported unavailable", node_name);
        return Ok(unavailable_node(&node_name, Utc::now()));
    };

    let sample = match collector.node_metrics(&node_name).await {
        Ok(sample) => sample,
        Err(err) => {
            warn!("Failed to get metrics for node {}: {}", node_name, err);
            return Ok(unavailable_node(&node_name, Utc::now()));
        }
    };

    match normalize_node(&node_name, &sample, NodeCapacity::from_node(&node)) {
        Ok(record) => Ok(record),
        Err(err) => {
            warn!("Undecodable metrics sample for node {}: {}", node_name, err);
            Ok(unavailable_node(&node_name, Utc::now()))
        }
    }
}

pub async fn list_node_metrics(ctx: &ServiceContext) -> Result<MetricsListResponse<NodeMetricsRecord>, AppError> {
    let Some(collector) = ctx.collector() else {
        return Ok(MetricsListResponse::unavailable());
    };

    let (samples, nodes) = join(collector.list_node_metrics(), ctx.cluster.list_nodes()).await;

    let samples = match samples {
        Ok(samples) => samples,
        Err(err) => {
            warn!("Failed to list node metrics: {}", err);
            return Ok(MetricsListResponse::unavailable());
        }
    };

    let capacities: HashMap<String, NodeCapacity> = match nodes {
        Ok(nodes) => nodes
            .iter()
            .filter_map(|n| n.metadata.name.clone().map(|name| (name, NodeCapacity::from_node(n))))
            .collect(),
        Err(err) => {
            warn!("Failed to list nodes for capacity, percentages omitted: {}", err);
            HashMap::new()
        }
    };

    let items = samples
        .iter()
        .filter_map(|sample| {
            let name = sample.metadata.name.as_deref().unwrap_or_default();
            let capacity = capacities.get(name).copied().unwrap_or_default();
            normalize_node(name, sample, capacity)
                .map_err(|err| warn!("Skipping metrics for node {}: {}", name, err))
                .ok()
        })
        .collect();

    Ok(MetricsListResponse::available(items))
}

/// Usage for one pod, summed over its containers. The pod must exist.
pub async fn get_pod_metrics(
    ctx: &ServiceContext,
    namespace: String,
    pod_name: String,
) -> Result<PodMetricsRecord, AppError> {
    ctx.cluster.get_pod(&namespace, &pod_name).await?;

    let Some(collector) = ctx.collector() else {
        return Ok(unavailable_pod(&namespace, &pod_name, Utc::now()));
    };

    let sample = match collector.pod_metrics(&namespace, &pod_name).await {
        Ok(sample) => sample,
        Err(err) => {
            warn!("Failed to get metrics for pod {}/{}: {}", namespace, pod_name, err);
            return Ok(unavailable_pod(&namespace, &pod_name, Utc::now()));
        }
    };

    match normalize_pod(&sample) {
        Ok(record) => Ok(record),
        Err(err) => {
            warn!("Undecodable metrics sample for pod {}/{}: {}", namespace, pod_name, err);
            Ok(unavailable_pod(&namespace, &pod_name, Utc::now()))
        }
    }
}

pub async fn list_pod_metrics(
    ctx: &ServiceContext,
    namespace: Option<String>,
) -> Result<MetricsListResponse<PodMetricsRecord>, AppError> {
    let Some(collector) = ctx.collector() else {
        return Ok(MetricsListResponse::unavailable());
    };

    let samples = match collector.list_pod_metrics(namespace.as_deref()).await {
        Ok(samples) => samples,
        Err(err) => {
            warn!("Failed to list pod metrics: {}", err);
            return Ok(MetricsListResponse::unavailable());
        }
    };

    let items = samples
        .iter()
        .filter_map(|sample| {
            normalize_pod(sample)
                .map_err(|err| {
                    warn!(
                        "Skipping metrics for pod {}/{}: {}",
                        sample.metadata.namespace.as_deref().unwrap_or_default(),
                        sample.metadata.name.as_deref().unwrap_or_default(),
                        err
                    )
                })
                .ok()
        })
        .collect();

    Ok(MetricsListResponse::available(items))
}
