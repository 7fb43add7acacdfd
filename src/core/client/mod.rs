// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod metrics_resources;
pub mod mappers;

// Per-resource API calls
pub mod deployments;
pub mod events;
pub mod metrics;
pub mod namespaces;
pub mod nodes;
pub mod pods;
pub mod services;

// Seams used by the domain services
pub mod cluster_api;
pub mod metrics_api;
