//! The metrics.k8s.io seam. A collector may be absent altogether
//! (metrics disabled), or present and failing (metrics-server not installed).

use async_trait::async_trait;
use kube::Client;
use thiserror::Error;

use crate::core::client::kube_resources::{NodeMetrics, PodMetrics};
use crate::core::client::metrics;

#[derive(Debug, Error)]
pub enum CollectorError {
    /// The metrics API is not served or has no sample for the target.
    #[error("metrics API unavailable: {0}")]
    Unavailable(String),

    #[error("metrics request failed: {0}")]
    Request(String),
}

impl From<kube::Error> for CollectorError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if matches!(resp.code, 404 | 503) => {
                CollectorError::Unavailable(resp.message.clone())
            }
            other => CollectorError::Request(other.to_string()),
        }
    }
}

#[async_trait]
pub trait MetricsCollector: Send + Sync {
    async fn node_metrics(&self, node_name: &str) -> Result<NodeMetrics, CollectorError>;
    async fn list_node_metrics(&self) -> Result<Vec<NodeMetrics>, CollectorError>;
    async fn pod_metrics(&self, namespace: &str, pod_name: &str) -> Result<PodMetrics, CollectorError>;
    async fn list_pod_metrics(&self, namespace: Option<&str>) -> Result<Vec<PodMetrics>, CollectorError>;
}

/// [`MetricsCollector`] backed by metrics-server through the API server.
#[derive(Clone)]
pub struct KubeMetricsCollector {
    client: Client,
}

impl KubeMetricsCollector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricsCollector for KubeMetricsCollector {
    async fn node_metrics(&self, node_name: &str) -> Result<NodeMetrics, CollectorError> {
        Ok(metrics::fetch_node_metrics(&self.client, node_name).await?)
    }

    async fn list_node_metrics(&self) -> Result<Vec<NodeMetrics>, CollectorError> {
        Ok(metrics::fetch_all_node_metrics(&self.client).await?)
    }

    async fn pod_metrics(&self, namespace: &str, pod_name: &str) -> Result<PodMetrics, CollectorError> {
        Ok(metrics::fetch_pod_metrics(&self.client, namespace, pod_name).await?)
    }

    async fn list_pod_metrics(&self, namespace: Option<&str>) -> Result<Vec<PodMetrics>, CollectorError> {
        Ok(metrics::fetch_all_pod_metrics(&self.client, namespace).await?)
    }
}
