use std::sync::Arc;

use kube::Client;

use crate::api::middleware::access_gate::AccessGate;
use crate::config::AppConfig;
use crate::core::client::cluster_api::{ClusterApi, KubeClusterApi};
use crate::core::client::metrics_api::{KubeMetricsCollector, MetricsCollector};
use crate::domain::auth::credentials::AdminCredentials;
use crate::domain::auth::service::AuthService;
use crate::domain::auth::token_service::{AuthError, TokenService};
use crate::domain::common::service::ServiceContext;
use crate::errors::AppError;

/// Forward each method to a domain function, passing the service context first.
macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> Result<$ret, AppError> {
                $path(&self.ctx, $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth_service: Arc<AuthService>,
    pub access_gate: Arc<AccessGate>,
    pub info_k8s_service: Arc<InfoK8sService>,
    pub metric_service: Arc<MetricService>,
}

impl AppState {
    /// Wire the services around the given collaborators. `metrics` is
    /// ignored when metrics are disabled in `config`.
    pub fn new(
        config: AppConfig,
        cluster: Arc<dyn ClusterApi>,
        metrics: Option<Arc<dyn MetricsCollector>>,
    ) -> Result<Self, AuthError> {
        let tokens = Arc::new(TokenService::new(&config.jwt_secret)?);
        let credentials = AdminCredentials::new(config.admin_username.clone(), config.admin_password.clone());
        let metrics = metrics.filter(|_| config.metrics_enabled);
        let ctx = ServiceContext::new(cluster, metrics);

        Ok(Self {
            auth_service: Arc::new(AuthService::new(credentials, tokens.clone())),
            access_gate: Arc::new(AccessGate::new(tokens)),
            info_k8s_service: Arc::new(InfoK8sService { ctx: ctx.clone() }),
            metric_service: Arc::new(MetricService { ctx }),
            config: Arc::new(config),
        })
    }
}

pub fn build_app_state(config: AppConfig, client: Client) -> Result<AppState, AuthError> {
    let cluster: Arc<dyn ClusterApi> = Arc::new(KubeClusterApi::new(client.clone()));
    let metrics: Arc<dyn MetricsCollector> = Arc::new(KubeMetricsCollector::new(client));
    AppState::new(config, cluster, Some(metrics))
}

pub struct InfoK8sService {
    ctx: ServiceContext,
}

impl InfoK8sService {
    delegate_async_service! {
        fn list_pods() -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::PodView> => crate::domain::info::service::info_k8s_pod_service::list_pods;
        fn get_pod(namespace: String, name: String) -> crate::domain::info::dto::views::PodView => crate::domain::info::service::info_k8s_pod_service::get_pod;
        fn delete_pod(namespace: String, name: String) -> () => crate::domain::info::service::info_k8s_pod_service::delete_pod;
        fn get_pod_logs(namespace: String, name: String, tail_lines: i64) -> String => crate::domain::info::service::info_k8s_pod_service::get_pod_logs;
        fn list_deployments() -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::DeploymentView> => crate::domain::info::service::info_k8s_deployment_service::list_deployments;
        fn get_deployment(namespace: String, name: String) -> crate::domain::info::dto::views::DeploymentView => crate::domain::info::service::info_k8s_deployment_service::get_deployment;
        fn create_deployment(req: crate::domain::info::dto::requests::CreateDeploymentRequest) -> crate::domain::info::dto::views::DeploymentView => crate::domain::info::service::info_k8s_deployment_service::create_deployment;
        fn update_deployment(namespace: String, name: String, req: crate::domain::info::dto::requests::UpdateDeploymentRequest) -> crate::domain::info::dto::views::DeploymentView => crate::domain::info::service::info_k8s_deployment_service::update_deployment;
        fn delete_deployment(namespace: String, name: String) -> () => crate::domain::info::service::info_k8s_deployment_service::delete_deployment;
        fn list_services() -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::ServiceView> => crate::domain::info::service::info_k8s_service_service::list_services;
        fn get_service(namespace: String, name: String) -> crate::domain::info::dto::views::ServiceView => crate::domain::info::service::info_k8s_service_service::get_service;
        fn create_service(req: crate::domain::info::dto::requests::CreateServiceRequest) -> crate::domain::info::dto::views::ServiceView => crate::domain::info::service::info_k8s_service_service::create_service;
        fn delete_service(namespace: String, name: String) -> () => crate::domain::info::service::info_k8s_service_service::delete_service;
        fn list_namespaces() -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::NamespaceView> => crate::domain::info::service::info_k8s_namespace_service::list_namespaces;
        fn get_namespace(name: String) -> crate::domain::info::dto::views::NamespaceView => crate::domain::info::service::info_k8s_namespace_service::get_namespace;
        fn create_namespace(req: crate::domain::info::dto::requests::CreateNamespaceRequest) -> crate::domain::info::dto::views::NamespaceView => crate::domain::info::service::info_k8s_namespace_service::create_namespace;
        fn delete_namespace(name: String) -> () => crate::domain::info::service::info_k8s_namespace_service::delete_namespace;
        fn list_nodes() -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::NodeView> => crate::domain::info::service::info_k8s_node_service::list_nodes;
        fn get_node(name: String) -> crate::domain::info::dto::views::NodeView => crate::domain::info::service::info_k8s_node_service::get_node;
        fn list_events(namespace: Option<String>) -> crate::domain::common::model::ItemsResponse<crate::domain::info::dto::views::EventView> => crate::domain::info::service::info_k8s_event_service::list_events;
        fn get_cluster_info() -> crate::domain::info::dto::views::ClusterInfoView => crate::domain::info::service::info_k8s_cluster_service::get_cluster_info;
        fn get_cluster_health() -> crate::domain::info::dto::views::ClusterHealthView => crate::domain::info::service::info_k8s_cluster_service::get_cluster_health;
        fn get_cluster_version() -> crate::domain::info::dto::views::ClusterVersionView => crate::domain::info::service::info_k8s_cluster_service::get_cluster_version;
    }
}

pub struct MetricService {
    ctx: ServiceContext,
}

impl MetricService {
    delegate_async_service! {
        fn get_node_metrics(node_name: String) -> crate::domain::metric::dto::NodeMetricsRecord => crate::domain::metric::service::get_node_metrics;
        fn list_node_metrics() -> crate::domain::metric::dto::MetricsListResponse<crate::domain::metric::dto::NodeMetricsRecord> => crate::domain::metric::service::list_node_metrics;
        fn get_pod_metrics(namespace: String, pod_name: String) -> crate::domain::metric::dto::PodMetricsRecord => crate::domain::metric::service::get_pod_metrics;
        fn list_pod_metrics(namespace: Option<String>) -> crate::domain::metric::dto::MetricsListResponse<crate::domain::metric::dto::PodMetricsRecord> => crate::domain::metric::service::list_pod_metrics;
    }
}
