//! Turns raw metrics.k8s.io samples into dashboard metric records.
//!
//! CPU is normalized to milli-cores and memory to bytes. Percentages are only
//! attached when a positive capacity is known; pod records never carry one.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::core::client::kube_resources::{Node, NodeMetrics, PodMetrics, Quantity};
use crate::core::util::quantity::{
    format_cpu_millis, format_memory_bytes, parse_cpu_millis, parse_memory_bytes, QuantityError,
};
use crate::domain::metric::dto::{
    ContainerMetric, NodeMetricsRecord, PodMetricsRecord, ResourceMetric, METRICS_NOT_AVAILABLE, UNIT_CPU,
    UNIT_MEMORY,
};

const CPU: &str = "cpu";
const MEMORY: &str = "memory";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("sample has no '{0}' usage")]
    MissingUsage(&'static str),

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error("summed '{0}' usage is out of range")]
    TotalOutOfRange(&'static str),
}

/// A node's `status.capacity` figures in normalized units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCapacity {
    pub cpu_millis: Option<i64>,
    pub memory_bytes: Option<i64>,
}

impl NodeCapacity {
    /// Unparseable capacity entries are treated as missing.
    pub fn from_node(node: &Node) -> Self {
        let capacity = node.status.as_ref().and_then(|s| s.capacity.as_ref());
        let get = |key: &str| capacity.and_then(|c| c.get(key)).map(|q| q.0.as_str());

        Self {
            cpu_millis: get(CPU).and_then(|raw| parse_cpu_millis(raw).ok()),
            memory_bytes: get(MEMORY).and_then(|raw| parse_memory_bytes(raw).ok()),
        }
    }
}

/// `usage / capacity * 100`, or `None` when capacity is missing or not positive.
pub fn percentage(usage: i64, capacity: Option<i64>) -> Option<f64> {
    capacity
        .filter(|c| *c > 0)
        .map(|c| usage as f64 / c as f64 * 100.0)
}

fn usage_of<'a>(usage: &'a BTreeMap<String, Quantity>, key: &'static str) -> Result<&'a str, NormalizeError> {
    usage
        .get(key)
        .map(|q| q.0.as_str())
        .ok_or(NormalizeError::MissingUsage(key))
}

pub fn cpu_metric(raw: &str, capacity_millis: Option<i64>) -> Result<ResourceMetric, NormalizeError> {
    let millis = parse_cpu_millis(raw)?;
    Ok(ResourceMetric {
        value: raw.to_string(),
        quantity: millis,
        percentage: percentage(millis, capacity_millis),
        unit: UNIT_CPU.to_string(),
    })
}

pub fn memory_metric(raw: &str, capacity_bytes: Option<i64>) -> Result<ResourceMetric, NormalizeError> {
    let bytes = parse_memory_bytes(raw)?;
    Ok(ResourceMetric {
        value: raw.to_string(),
        quantity: bytes,
        percentage: percentage(bytes, capacity_bytes),
        unit: UNIT_MEMORY.to_string(),
    })
}

fn timestamp_now(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn normalize_node(
    node_name: &str,
    sample: &NodeMetrics,
    capacity: NodeCapacity,
) -> Result<NodeMetricsRecord, NormalizeError> {
    let cpu = cpu_metric(usage_of(&sample.usage, CPU)?, capacity.cpu_millis)?;
    let memory = memory_metric(usage_of(&sample.usage, MEMORY)?, capacity.memory_bytes)?;

    Ok(NodeMetricsRecord {
        node_name: node_name.to_string(),
        cpu,
        memory,
        timestamp: sample.timestamp.clone(),
        window: sample.window.clone(),
        available: true,
        message: None,
    })
}

/// The success-shaped record returned when no usable sample exists for the node.
pub fn unavailable_node(node_name: &str, now: DateTime<Utc>) -> NodeMetricsRecord {
    NodeMetricsRecord {
        node_name: node_name.to_string(),
        cpu: ResourceMetric::unavailable(UNIT_CPU),
        memory: ResourceMetric::unavailable(UNIT_MEMORY),
        timestamp: timestamp_now(now),
        window: String::new(),
        available: false,
        message: Some(METRICS_NOT_AVAILABLE.to_string()),
    }
}

fn checked_total(mut quantities: impl Iterator<Item = i64>, key: &'static str) -> Result<i64, NormalizeError> {
    quantities.try_fold(0i64, |acc, q| acc.checked_add(q).ok_or(NormalizeError::TotalOutOfRange(key)))
}

pub fn normalize_pod(sample: &PodMetrics) -> Result<PodMetricsRecord, NormalizeError> {
    let containers = sample
        .containers
        .iter()
        .map(|c| {
            Ok(ContainerMetric {
                name: c.name.clone(),
                cpu: cpu_metric(usage_of(&c.usage, CPU)?, None)?,
                memory: memory_metric(usage_of(&c.usage, MEMORY)?, None)?,
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    let total_cpu = checked_total(containers.iter().map(|c| c.cpu.quantity), CPU)?;
    let total_memory = checked_total(containers.iter().map(|c| c.memory.quantity), MEMORY)?;

    Ok(PodMetricsRecord {
        pod_name: sample.metadata.name.clone().unwrap_or_default(),
        namespace: sample.metadata.namespace.clone().unwrap_or_default(),
        containers,
        cpu: ResourceMetric {
            value: format_cpu_millis(total_cpu),
            quantity: total_cpu,
            percentage: None,
            unit: UNIT_CPU.to_string(),
        },
        memory: ResourceMetric {
            value: format_memory_bytes(total_memory),
            quantity: total_memory,
            percentage: None,
            unit: UNIT_MEMORY.to_string(),
        },
        timestamp: sample.timestamp.clone(),
        window: sample.window.clone(),
        available: true,
        message: None,
    })
}

pub fn unavailable_pod(namespace: &str, pod_name: &str, now: DateTime<Utc>) -> PodMetricsRecord {
    PodMetricsRecord {
        pod_name: pod_name.to_string(),
        namespace: namespace.to_string(),
        containers: Vec::new(),
        cpu: ResourceMetric::unavailable(UNIT_CPU),
        memory: ResourceMetric::unavailable(UNIT_MEMORY),
        timestamp: timestamp_now(now),
        window: String::new(),
        available: false,
        message: Some(METRICS_NOT_AVAILABLE.to_string()),
    }
}
