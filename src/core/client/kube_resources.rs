//! Re-export the Kubernetes resource types the gateway reads and mutates
//! This module provides a centralized place for all K8s resource types

pub use k8s_openapi::api::core::v1::{
    Container as K8sContainer,
    ContainerPort,
    Event,
    Namespace,
    Node,
    Pod,
    Service,
    ServicePort,
};

pub use k8s_openapi::api::apps::v1::Deployment;

pub use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub use k8s_openapi::apimachinery::pkg::version::Info as VersionInfo;

pub use super::metrics_resources::{ContainerMetrics, NodeMetrics, PodMetrics};
