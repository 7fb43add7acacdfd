//! In-memory collaborators and request helpers shared by the API tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use kubedash_core::app_state::AppState;
use kubedash_core::config::AppConfig;
use kubedash_core::core::client::cluster_api::{ClusterApi, ClusterError, ClusterResult};
use kubedash_core::core::client::kube_resources::{
    Deployment, Event, Namespace, Node, NodeMetrics, Pod, PodMetrics, Quantity, Service, VersionInfo,
};
use kubedash_core::core::client::metrics_api::{CollectorError, MetricsCollector};
use kubedash_core::core::client::metrics_resources::ContainerMetrics;
use kubedash_core::routes::app_router;

pub const SECRET: &str = "integration-test-secret";

/// Cluster double. Every trait call bumps `calls`, so tests can assert the
/// access gate rejected a request before any cluster work happened.
#[derive(Default)]
pub struct FakeCluster {
    pub calls: AtomicUsize,
    pub nodes: Mutex<Vec<Node>>,
    pub pods: Mutex<Vec<Pod>>,
    pub deployments: Mutex<Vec<Deployment>>,
    pub namespaces: Mutex<Vec<Namespace>>,
}

impl FakeCluster {
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: Mutex::new(nodes),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn not_found(kind: &'static str, name: String) -> ClusterError {
    ClusterError::NotFound { kind, name }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn list_pods(&self) -> ClusterResult<Vec<Pod>> {
        self.hit();
        Ok(self.pods.lock().unwrap().clone())
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> ClusterResult<Pod> {
        self.hit();
        self.pods
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.metadata.namespace.as_deref() == Some(namespace) && p.metadata.name.as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| not_found("pod", format!("{namespace}/{name}")))
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        self.hit();
        let mut pods = self.pods.lock().unwrap();
        let before = pods.len();
        pods.retain(|p| !(p.metadata.namespace.as_deref() == Some(namespace) && p.metadata.name.as_deref() == Some(name)));
        if pods.len() == before {
            return Err(not_found("pod", format!("{namespace}/{name}")));
        }
        Ok(())
    }

    async fn pod_logs(&self, namespace: &str, name: &str, tail_lines: i64) -> ClusterResult<String> {
        self.get_pod(namespace, name).await?;
        Ok((1..=tail_lines).map(|i| format!("line {i}\n")).collect())
    }

    async fn list_deployments(&self) -> ClusterResult<Vec<Deployment>> {
        self.hit();
        Ok(self.deployments.lock().unwrap().clone())
    }

    async fn get_deployment(&self, namespace: &str, name: &str) -> ClusterResult<Deployment> {
        self.hit();
        self.deployments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.metadata.namespace.as_deref() == Some(namespace) && d.metadata.name.as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| not_found("deployment", format!("{namespace}/{name}")))
    }

    async fn create_deployment(&self, namespace: &str, deployment: &Deployment) -> ClusterResult<Deployment> {
        self.hit();
        let name = deployment.metadata.name.clone().unwrap_or_default();
        let mut deployments = self.deployments.lock().unwrap();
        if deployments
            .iter()
            .any(|d| d.metadata.namespace.as_deref() == Some(namespace) && d.metadata.name.as_deref() == Some(&name))
        {
            return Err(ClusterError::AlreadyExists {
                kind: "deployment",
                name: format!("{namespace}/{name}"),
            });
        }
        let mut created = deployment.clone();
        created.metadata.namespace = Some(namespace.to_string());
        deployments.push(created.clone());
        Ok(created)
    }

    async fn replace_deployment(&self, namespace: &str, name: &str, deployment: &Deployment) -> ClusterResult<Deployment> {
        self.hit();
        let mut deployments = self.deployments.lock().unwrap();
        let slot = deployments
            .iter_mut()
            .find(|d| d.metadata.namespace.as_deref() == Some(namespace) && d.metadata.name.as_deref() == Some(name))
            .ok_or_else(|| not_found("deployment", format!("{namespace}/{name}")))?;
        *slot = deployment.clone();
        Ok(deployment.clone())
    }

    async fn delete_deployment(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        self.get_deployment(namespace, name).await?;
        self.deployments
            .lock()
            .unwrap()
            .retain(|d| !(d.metadata.namespace.as_deref() == Some(namespace) && d.metadata.name.as_deref() == Some(name)));
        Ok(())
    }

    async fn list_services(&self) -> ClusterResult<Vec<Service>> {
        self.hit();
        Ok(Vec::new())
    }

    async fn get_service(&self, namespace: &str, name: &str) -> ClusterResult<Service> {
        self.hit();
        Err(not_found("service", format!("{namespace}/{name}")))
    }

    async fn create_service(&self, namespace: &str, service: &Service) -> ClusterResult<Service> {
        self.hit();
        let mut created = service.clone();
        created.metadata.namespace = Some(namespace.to_string());
        Ok(created)
    }

    async fn delete_service(&self, namespace: &str, name: &str) -> ClusterResult<()> {
        self.hit();
        Err(not_found("service", format!("{namespace}/{name}")))
    }

    async fn list_namespaces(&self) -> ClusterResult<Vec<Namespace>> {
        self.hit();
        Ok(self.namespaces.lock().unwrap().clone())
    }

    async fn get_namespace(&self, name: &str) -> ClusterResult<Namespace> {
        self.hit();
        self.namespaces
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.metadata.name.as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| not_found("namespace", name.to_string()))
    }

    async fn create_namespace(&self, namespace: &Namespace) -> ClusterResult<Namespace> {
        self.hit();
        self.namespaces.lock().unwrap().push(namespace.clone());
        Ok(namespace.clone())
    }

    async fn delete_namespace(&self, name: &str) -> ClusterResult<()> {
        self.get_namespace(name).await?;
        self.namespaces
            .lock()
            .unwrap()
            .retain(|n| n.metadata.name.as_deref() != Some(name));
        Ok(())
    }

    async fn list_nodes(&self) -> ClusterResult<Vec<Node>> {
        self.hit();
        Ok(self.nodes.lock().unwrap().clone())
    }

    async fn get_node(&self, name: &str) -> ClusterResult<Node> {
        self.hit();
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.metadata.name.as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| not_found("node", name.to_string()))
    }

    async fn list_events(&self, _namespace: Option<&str>) -> ClusterResult<Vec<Event>> {
        self.hit();
        Ok(Vec::new())
    }

    async fn server_version(&self) -> ClusterResult<VersionInfo> {
        self.hit();
        Ok(serde_json::from_value(json!({
            "major": "1",
            "minor": "31",
            "gitVersion": "v1.31.2",
            "gitCommit": "abc123",
            "gitTreeState": "clean",
            "buildDate": "2024-10-22T20:28:14Z",
            "goVersion": "go1.22.8",
            "compiler": "gc",
            "platform": "linux/amd64"
        }))
        .unwrap())
    }
}

/// Metrics double: either unreachable, or serving fixed samples.
pub enum FakeCollector {
    Failing,
    Serving {
        nodes: Vec<NodeMetrics>,
        pods: Vec<PodMetrics>,
    },
}

#[async_trait]
impl MetricsCollector for FakeCollector {
    async fn node_metrics(&self, node_name: &str) -> Result<NodeMetrics, CollectorError> {
        match self {
            FakeCollector::Failing => Err(CollectorError::Request("connection refused".into())),
            FakeCollector::Serving { nodes, .. } => nodes
                .iter()
                .find(|n| n.metadata.name.as_deref() == Some(node_name))
                .cloned()
                .ok_or_else(|| CollectorError::Unavailable(format!("no sample for {node_name}"))),
        }
    }

    async fn list_node_metrics(&self) -> Result<Vec<NodeMetrics>, CollectorError> {
        match self {
            FakeCollector::Failing => Err(CollectorError::Request("connection refused".into())),
            FakeCollector::Serving { nodes, .. } => Ok(nodes.clone()),
        }
    }

    async fn pod_metrics(&self, namespace: &str, pod_name: &str) -> Result<PodMetrics, CollectorError> {
        match self {
            FakeCollector::Failing => Err(CollectorError::Request("connection refused".into())),
            FakeCollector::Serving { pods, .. } => pods
                .iter()
                .find(|p| {
                    p.metadata.namespace.as_deref() == Some(namespace) && p.metadata.name.as_deref() == Some(pod_name)
                })
                .cloned()
                .ok_or_else(|| CollectorError::Unavailable(format!("no sample for {namespace}/{pod_name}"))),
        }
    }

    async fn list_pod_metrics(&self, namespace: Option<&str>) -> Result<Vec<PodMetrics>, CollectorError> {
        match self {
            FakeCollector::Failing => Err(CollectorError::Request("connection refused".into())),
            FakeCollector::Serving { pods, .. } => Ok(pods
                .iter()
                .filter(|p| namespace.is_none() || p.metadata.namespace.as_deref() == namespace)
                .cloned()
                .collect()),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn app_with(cluster: Arc<FakeCluster>, collector: Option<FakeCollector>) -> Router {
    let metrics = collector.map(|c| Arc::new(c) as Arc<dyn MetricsCollector>);
    let state = AppState::new(test_config(), cluster, metrics).unwrap();
    app_router(state)
}

pub fn node(name: &str, ready: bool, cpu: &str, memory: &str) -> Node {
    serde_json::from_value(json!({
        "metadata": { "name": name },
        "status": {
            "capacity": { "cpu": cpu, "memory": memory },
            "conditions": [
                { "type": "Ready", "status": if ready { "True" } else { "False" } }
            ]
        }
    }))
    .unwrap()
}

pub fn pod(namespace: &str, name: &str, phase: &str) -> Pod {
    serde_json::from_value(json!({
        "metadata": { "name": name, "namespace": namespace },
        "spec": { "containers": [ { "name": "app", "image": "nginx:1.27" } ] },
        "status": { "phase": phase }
    }))
    .unwrap()
}

fn usage(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        ("cpu".to_string(), Quantity(cpu.to_string())),
        ("memory".to_string(), Quantity(memory.to_string())),
    ])
}

pub fn node_sample(name: &str, cpu: &str, memory: &str) -> NodeMetrics {
    let mut sample = NodeMetrics {
        timestamp: "2024-05-01T10:00:00Z".to_string(),
        window: "30s".to_string(),
        usage: usage(cpu, memory),
        ..Default::default()
    };
    sample.metadata.name = Some(name.to_string());
    sample
}

pub fn pod_sample(namespace: &str, name: &str, containers: &[(&str, &str, &str)]) -> PodMetrics {
    let mut sample = PodMetrics {
        timestamp: "2024-05-01T10:00:00Z".to_string(),
        window: "30s".to_string(),
        containers: containers
            .iter()
            .map(|(c, cpu, memory)| ContainerMetrics {
                name: c.to_string(),
                usage: usage(cpu, memory),
            })
            .collect(),
        ..Default::default()
    };
    sample.metadata.name = Some(name.to_string());
    sample.metadata.namespace = Some(namespace.to_string());
    sample
}

pub async fn login_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        Request::post("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"username": "admin", "password": "password"}).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// Run one request through the router and decode the JSON body (Null when empty or not JSON).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
