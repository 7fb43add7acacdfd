//! The cluster-state seam. Services depend on [`ClusterApi`] only, so the
//! Kubernetes API can be replaced by an in-memory double in tests.

use async_trait::async_trait;
use kube::Client;
use thiserror::Error;

use crate::core::client::kube_resources::{Deployment, Event, Namespace, Node, Pod, Service, VersionInfo};
use crate::core::client::{deployments, events, namespaces, nodes, pods, services};

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("Kubernetes API error: {0}")]
    Api(String),
}

pub type ClusterResult<T> = Result<T, ClusterError>;

impl ClusterError {
    /// Classify a kube error for the object `kind` named `name`.
    pub fn from_kube(kind: &'static str, name: &str, err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 404 => ClusterError::NotFound {
                kind,
                name: name.to_string(),
            },
            kube::Error::Api(resp) if resp.code == 409 => ClusterError::AlreadyExists {
                kind,
                name: name.to_string(),
            },
            other => ClusterError::Api(other.to_string()),
        }
    }
}

fn qualified(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn list_pods(&self) -> ClusterResult<Vec<Pod>>;
    async fn get_pod(&self, namespace: &str, name: &str) -> ClusterResult<Pod>;
    async fn delete_pod(&self, namespace: &str, name: &str) -> ClusterResult<()>;
    async fn pod_logs(&self, namespace: &str, name: &str, tail_lines: i64) -> ClusterResult<String>;

    async fn list_deployments(&self) -> ClusterResult<Vec<Deployment>>;
    async fn get_deployment(&self, namespace: &str, name: &str) -> ClusterResult<Deployment>;
    async fn create_deployment(&self, namespace: &str, deployment: &Deployment) -> ClusterResult<Deployment>;
    async fn replace_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> ClusterResult<Deployment>;
    async fn delete_deployment(&self, namespace: &str, name: &str) -> ClusterResult<()>;

    async fn list_services(&self) -> ClusterResult<Vec<Service>>;
    async fn get_service(&self, namespace: &str, name: &str) -> ClusterResult<Service>;
    async fn create_service(&self, namespace: &str, service: &Service) -> ClusterResult<Service>;
    async fn delete_service(&self, namespace: &str, name: &str) -> ClusterResult<()>;

    async fn list_namespaces(&self) -> ClusterResult<Vec<Namespace>>;
    async fn get_namespace(&self, name: &str) -> ClusterResult<Namespace>;
    async fn create_namespace(&self, namespace: &Namespace) -> ClusterResult<Namespace>;
    async fn delete_namespace(&self, name: &str) -> ClusterResult<()>;

    async fn list_nodes(&self) -> ClusterResult<Vec<Node>>;
    async fn get_node(&self, name: &str) -> ClusterResult<Node>;

    async fn list_events(&self, namespace: Option<&str>) -> ClusterResult<Vec<Event>>;

    async fn server_version(&self) -> ClusterResult<VersionInfo>;
}

/// [`ClusterApi`] backed by the Kubernetes API server.
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    async fn list_pods(&self) -> ClusterResult<Vec<Pod>> {
        pods::fetch_pods(&self.client)
            .await
            .map_err(|e| ClusterError::from_kube("pod", "*", e))
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> ClusterResult<Pod> {
        pods::fetch_pod_by_name_and_namespace(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("pod", &qualified(namespace, name), e))
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        pods::delete_pod(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("pod", &qualified(namespace, name), e))
    }

    async fn pod_logs(&self, namespace: &str, name: &str, tail_lines: i64) -> ClusterResult<String> {
        pods::fetch_pod_logs(&self.client, namespace, name, tail_lines)
            .await
            .map_err(|e| ClusterError::from_kube("pod", &qualified(namespace, name), e))
    }

    async fn list_deployments(&self) -> ClusterResult<Vec<Deployment>> {
        deployments::fetch_deployments(&self.client)
            .await
            .map_err(|e| ClusterError::from_kube("deployment", "*", e))
    }

    async fn get_deployment(&self, namespace: &str, name: &str) -> ClusterResult<Deployment> {
        deployments::fetch_deployment(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("deployment", &qualified(namespace, name), e))
    }

    async fn create_deployment(&self, namespace: &str, deployment: &Deployment) -> ClusterResult<Deployment> {
        let name = deployment.metadata.name.clone().unwrap_or_default();
        deployments::create_deployment(&self.client, namespace, deployment)
            .await
            .map_err(|e| ClusterError::from_kube("deployment", &qualified(namespace, &name), e))
    }

    async fn replace_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> ClusterResult<Deployment> {
        deployments::replace_deployment(&self.client, namespace, name, deployment)
            .await
            .map_err(|e| ClusterError::from_kube("deployment", &qualified(namespace, name), e))
    }

    async fn delete_deployment(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        deployments::delete_deployment(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("deployment", &qualified(namespace, name), e))
    }

    async fn list_services(&self) -> ClusterResult<Vec<Service>> {
        services::fetch_services(&self.client)
            .await
            .map_err(|e| ClusterError::from_kube("service", "*", e))
    }

    async fn get_service(&self, namespace: &str, name: &str) -> ClusterResult<Service> {
        services::fetch_service(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("service", &qualified(namespace, name), e))
    }

    async fn create_service(&self, namespace: &str, service: &Service) -> ClusterResult<Service> {
        let name = service.metadata.name.clone().unwrap_or_default();
        services::create_service(&self.client, namespace, service)
            .await
            .map_err(|e| ClusterError::from_kube("service", &qualified(namespace, &name), e))
    }

    async fn delete_service(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        services::delete_service(&self.client, namespace, name)
            .await
            .map_err(|e| ClusterError::from_kube("service", &qualified(namespace, name), e))
    }

    async fn list_namespaces(&self) -> ClusterResult<Vec<Namespace>> {
        namespaces::fetch_namespaces(&self.client)
            .await
            .map_err(|e| ClusterError::from_kube("namespace", "*", e))
    }

    async fn get_namespace(&self, name: &str) -> ClusterResult<Namespace> {
        namespaces::fetch_namespace(&self.client, name)
            .await
            .map_err(|e| ClusterError::from_kube("namespace", name, e))
    }

    async fn create_namespace(&self, namespace: &Namespace) -> ClusterResult<Namespace> {
        let name = namespace.metadata.name.clone().unwrap_or_default();
        namespaces::create_namespace(&self.client, namespace)
            .await
            .map_err(|e| ClusterError::from_kube("namespace", &name, e))
    }

    async fn delete_namespace(&self, name: &str) -> ClusterResult<()> {
        namespaces::delete_namespace(&self.client, name)
            .await
            .map_err(|e| ClusterError::from_kube("namespace", name, e))
    }

    async fn list_nodes(&self) -> ClusterResult<Vec<Node>> {
        nodes::fetch_nodes(&self.client)
            .await
            .map_err(|e| ClusterError::from_kube("node", "*", e))
    }

    async fn get_node(&self, name: &str) -> ClusterResult<Node> {
        nodes::fetch_node_by_name(&self.client, name)
            .await
            .map_err(|e| ClusterError::from_kube("node", name, e))
    }

    async fn list_events(&self, namespace: Option<&str>) -> ClusterResult<Vec<Event>> {
        events::fetch_events(&self.client, namespace)
            .await
            .map_err(|e| ClusterError::from_kube("event", namespace.unwrap_or("*"), e))
    }

    async fn server_version(&self) -> ClusterResult<VersionInfo> {
        self.client
            .apiserver_version()
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))
    }
}
