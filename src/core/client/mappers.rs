/// Maps kube-rs / k8s-openapi types → dashboard views
use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

use crate::core::client::kube_resources::{
    Deployment, Event, Namespace, Node, Pod, Quantity, Service, VersionInfo,
};
use crate::domain::info::dto::views::{
    ClusterVersionView, DeploymentView, EventView, NamespaceView, NodeView, PodView, ServicePortView, ServiceView,
};

/// RFC 3339 rendering of an API timestamp, empty when absent.
///
/// Goes through serde so it does not depend on which time crate backs `Time`.
pub fn format_time(time: Option<&Time>) -> String {
    time.and_then(|t| serde_json::to_value(t).ok())
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn non_empty_labels(labels: Option<&BTreeMap<String, String>>) -> Option<BTreeMap<String, String>> {
    labels.filter(|l| !l.is_empty()).cloned()
}

pub fn map_pod_to_view(pod: &Pod) -> PodView {
    let metadata = &pod.metadata;
    let status = pod.status.as_ref();
    let spec = pod.spec.as_ref();

    let restart_count = status
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| statuses.iter().map(|c| c.restart_count).sum())
        .unwrap_or(0);

    let containers = spec
        .map(|s| s.containers.iter().map(|c| c.name.clone()).collect())
        .unwrap_or_default();

    PodView {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        status: status.and_then(|s| s.phase.clone()).unwrap_or_default(),
        restart_count,
        created_at: format_time(metadata.creation_timestamp.as_ref()),
        node_name: spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
        pod_ip: status.and_then(|s| s.pod_ip.clone()).unwrap_or_default(),
        containers,
        labels: non_empty_labels(metadata.labels.as_ref()),
    }
}

pub fn map_deployment_to_view(deployment: &Deployment) -> DeploymentView {
    let metadata = &deployment.metadata;
    let spec = deployment.spec.as_ref();

    DeploymentView {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        // the API server defaults an unset replica count to 1
        replicas: spec.and_then(|s| s.replicas).unwrap_or(1),
        available_replicas: deployment
            .status
            .as_ref()
            .and_then(|s| s.available_replicas)
            .unwrap_or(0),
        created_at: format_time(metadata.creation_timestamp.as_ref()),
        strategy: spec
            .and_then(|s| s.strategy.as_ref())
            .and_then(|s| s.type_.clone())
            .unwrap_or_default(),
        labels: non_empty_labels(metadata.labels.as_ref()),
    }
}

pub fn map_service_to_view(service: &Service) -> ServiceView {
    let metadata = &service.metadata;
    let spec = service.spec.as_ref();

    let ports = spec
        .and_then(|s| s.ports.as_ref())
        .map(|ports| {
            ports
                .iter()
                .map(|p| ServicePortView {
                    port: p.port,
                    protocol: p.protocol.clone().unwrap_or_else(|| "TCP".to_string()),
                })
                .collect()
        })
        .unwrap_or_default();

    ServiceView {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        type_: spec.and_then(|s| s.type_.clone()).unwrap_or_default(),
        cluster_ip: spec.and_then(|s| s.cluster_ip.clone()).unwrap_or_default(),
        ports,
        created_at: format_time(metadata.creation_timestamp.as_ref()),
    }
}

pub fn map_namespace_to_view(namespace: &Namespace) -> NamespaceView {
    let metadata = &namespace.metadata;

    NamespaceView {
        name: metadata.name.clone().unwrap_or_default(),
        status: namespace
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_default(),
        created_at: format_time(metadata.creation_timestamp.as_ref()),
        labels: non_empty_labels(metadata.labels.as_ref()),
    }
}

/// `Some(true)` when the node reports Ready=True, `None` when it has no Ready condition.
pub fn node_ready(node: &Node) -> Option<bool> {
    node.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conditions| conditions.iter().find(|c| c.type_ == "Ready"))
        .map(|c| c.status == "True")
}

pub fn map_node_to_view(node: &Node) -> NodeView {
    let metadata = &node.metadata;
    let status = node.status.as_ref();
    let node_info = status.and_then(|s| s.node_info.as_ref());

    let quantities = |map: Option<&BTreeMap<String, Quantity>>| -> BTreeMap<String, String> {
        map.map(|m| m.iter().map(|(k, v)| (k.clone(), v.0.clone())).collect())
            .unwrap_or_default()
    };

    let readiness = match node_ready(node) {
        Some(true) => "Ready",
        Some(false) => "NotReady",
        None => "Unknown",
    };

    NodeView {
        name: metadata.name.clone().unwrap_or_default(),
        status: readiness.to_string(),
        version: node_info.map(|i| i.kubelet_version.clone()).unwrap_or_default(),
        os_image: node_info.map(|i| i.os_image.clone()).unwrap_or_default(),
        capacity: quantities(status.and_then(|s| s.capacity.as_ref())),
        allocatable: quantities(status.and_then(|s| s.allocatable.as_ref())),
        created_at: format_time(metadata.creation_timestamp.as_ref()),
        labels: non_empty_labels(metadata.labels.as_ref()),
    }
}

pub fn map_event_to_view(event: &Event) -> EventView {
    let metadata = &event.metadata;
    let involved = &event.involved_object;

    let first_timestamp = format_time(event.first_timestamp.as_ref());
    let last_timestamp = match format_time(event.last_timestamp.as_ref()) {
        ts if ts.is_empty() => first_timestamp.clone(),
        ts => ts,
    };

    EventView {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        reason: event.reason.clone().unwrap_or_default(),
        message: event.message.clone().unwrap_or_default(),
        type_: event.type_.clone().unwrap_or_default(),
        involved_object: format!(
            "{}/{}",
            involved.kind.as_deref().unwrap_or_default(),
            involved.name.as_deref().unwrap_or_default()
        ),
        first_timestamp,
        last_timestamp,
        count: event.count.unwrap_or(0),
    }
}

pub fn map_version_to_view(info: &VersionInfo) -> ClusterVersionView {
    ClusterVersionView {
        git_version: info.git_version.clone(),
        git_commit: info.git_commit.clone(),
        git_tree_state: info.git_tree_state.clone(),
        build_date: info.build_date.clone(),
        go_version: info.go_version.clone(),
        compiler: info.compiler.clone(),
        platform: info.platform.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_from(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn pod_view_sums_restarts_and_lists_containers() {
        let pod: Pod = serde_json::from_value(json!({
            "metadata": {"name": "web-0", "namespace": "default", "creationTimestamp": "2024-05-01T10:00:00Z"},
            "spec": {"nodeName": "node-1", "containers": [{"name": "app"}, {"name": "sidecar"}]},
            "status": {
                "phase": "Running",
                "podIP": "10.0.0.7",
                "containerStatuses": [
                    {"name": "app", "restartCount": 2, "ready": true, "image": "a", "imageID": "a"},
                    {"name": "sidecar", "restartCount": 1, "ready": true, "image": "b", "imageID": "b"}
                ]
            }
        }))
        .unwrap();

        let view = map_pod_to_view(&pod);
        assert_eq!(view.restart_count, 3);
        assert_eq!(view.containers, vec!["app", "sidecar"]);
        assert_eq!(view.status, "Running");
        assert_eq!(view.pod_ip, "10.0.0.7");
        assert!(view.created_at.starts_with("2024-05-01T10:00:00"));
        assert!(view.labels.is_none());
    }

    #[test]
    fn node_status_follows_ready_condition() {
        let ready = node_from(json!({
            "metadata": {"name": "node-1"},
            "status": {
                "conditions": [{"type": "Ready", "status": "True"}],
                "capacity": {"cpu": "4", "memory": "16Gi"}
            }
        }));
        let view = map_node_to_view(&ready);
        assert_eq!(view.status, "Ready");
        assert_eq!(view.capacity.get("memory").map(String::as_str), Some("16Gi"));

        let not_ready = node_from(json!({
            "metadata": {"name": "node-2"},
            "status": {"conditions": [{"type": "Ready", "status": "Unknown"}]}
        }));
        assert_eq!(map_node_to_view(&not_ready).status, "NotReady");

        let bare = node_from(json!({"metadata": {"name": "node-3"}}));
        assert_eq!(map_node_to_view(&bare).status, "Unknown");
    }

    #[test]
    fn event_last_timestamp_falls_back_to_first() {
        let event: Event = serde_json::from_value(json!({
            "metadata": {"name": "web-0.17c", "namespace": "default"},
            "involvedObject": {"kind": "Pod", "name": "web-0"},
            "reason": "Pulled",
            "firstTimestamp": "2024-05-01T10:00:00Z",
            "count": 4
        }))
        .unwrap();

        let view = map_event_to_view(&event);
        assert_eq!(view.involved_object, "Pod/web-0");
        assert_eq!(view.last_timestamp, view.first_timestamp);
        assert_eq!(view.count, 4);
    }

    #[test]
    fn service_ports_default_to_tcp() {
        let service: Service = serde_json::from_value(json!({
            "metadata": {"name": "web", "namespace": "default"},
            "spec": {"type": "ClusterIP", "clusterIP": "10.96.0.12", "ports": [{"port": 80}]}
        }))
        .unwrap();

        let view = map_service_to_view(&service);
        assert_eq!(view.ports, vec![ServicePortView { port: 80, protocol: "TCP".into() }]);
        assert_eq!(view.cluster_ip, "10.96.0.12");
    }
}
