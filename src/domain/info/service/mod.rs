pub mod info_k8s_cluster_service;
pub mod info_k8s_deployment_service;
pub mod info_k8s_event_service;
pub mod info_k8s_namespace_service;
pub mod info_k8s_node_service;
pub mod info_k8s_pod_service;
pub mod info_k8s_service_service;
