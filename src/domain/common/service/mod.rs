use std::sync::Arc;

use crate::core::client::cluster_api::ClusterApi;
use crate::core::client::metrics_api::MetricsCollector;

/// Collaborators shared by every domain service function.
#[derive(Clone)]
pub struct ServiceContext {
    pub cluster: Arc<dyn ClusterApi>,
    /// `None` when metrics collection is disabled.
    pub metrics: Option<Arc<dyn MetricsCollector>>,
}

impl ServiceContext {
    pub fn new(cluster: Arc<dyn ClusterApi>, metrics: Option<Arc<dyn MetricsCollector>>) -> Self {
        Self { cluster, metrics }
    }

    pub fn collector(&self) -> Option<&dyn MetricsCollector> {
        self.metrics.as_deref()
    }
}
