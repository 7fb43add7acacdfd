use serde::{Deserialize, Serialize};

pub const UNIT_CPU: &str = "m";
pub const UNIT_MEMORY: &str = "bytes";
pub const UNAVAILABLE_VALUE: &str = "N/A";
pub const METRICS_NOT_AVAILABLE: &str = "Metrics not available";

/// One resource figure: the reported string, its normalized integer
/// (milli-cores or bytes) and, when capacity is known, utilization in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetric {
    pub value: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub percentage: Option<f64>,
    pub unit: String,
}

impl ResourceMetric {
    pub fn unavailable(unit: &str) -> Self {
        Self {
            value: UNAVAILABLE_VALUE.to_string(),
            quantity: 0,
            percentage: None,
            unit: unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetricsRecord {
    pub node_name: String,
    pub cpu: ResourceMetric,
    pub memory: ResourceMetric,
    pub timestamp: String,
    pub window: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMetric {
    pub name: String,
    pub cpu: ResourceMetric,
    pub memory: ResourceMetric,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodMetricsRecord {
    pub pod_name: String,
    pub namespace: String,
    pub containers: Vec<ContainerMetric>,
    pub cpu: ResourceMetric,
    pub memory: ResourceMetric,
    pub timestamp: String,
    pub window: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// List envelope for metrics endpoints; `available` is false when the
/// collector could not be reached at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsListResponse<T> {
    pub items: Vec<T>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl<T> MetricsListResponse<T> {
    pub fn available(items: Vec<T>) -> Self {
        Self {
            items,
            available: true,
            message: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            available: false,
            message: Some(METRICS_NOT_AVAILABLE.to_string()),
        }
    }
}
