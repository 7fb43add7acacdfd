use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

fn default_namespace() -> String {
    "default".to_string()
}

fn default_replicas() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeploymentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default = "default_namespace")]
    #[validate(length(min = 1, message = "namespace is required"))]
    pub namespace: String,
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    #[serde(default = "default_replicas")]
    #[validate(range(min = 0, message = "replicas must not be negative"))]
    pub replicas: i32,
    #[validate(range(min = 1, max = 65535, message = "port must be between 1 and 65535"))]
    pub port: i32,
}

/// Partial update: an empty image and a non-positive replica count are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeploymentRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub replicas: Option<i32>,
}

impl UpdateDeploymentRequest {
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|image| !image.is_empty())
    }

    pub fn replicas(&self) -> Option<i32> {
        self.replicas.filter(|replicas| *replicas > 0)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default = "default_namespace")]
    #[validate(length(min = 1, message = "namespace is required"))]
    pub namespace: String,
    #[validate(range(min = 1, max = 65535, message = "port must be between 1 and 65535"))]
    pub port: i32,
    #[validate(range(min = 1, max = 65535, message = "targetPort must be between 1 and 65535"))]
    pub target_port: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNamespaceRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deployment_defaults_namespace_and_replicas() {
        let req: CreateDeploymentRequest =
            serde_json::from_value(json!({"name": "web", "image": "nginx:1.27", "port": 80})).unwrap();
        assert_eq!(req.namespace, "default");
        assert_eq!(req.replicas, 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn deployment_rejects_out_of_range_port() {
        let req: CreateDeploymentRequest =
            serde_json::from_value(json!({"name": "web", "image": "nginx", "port": 70000})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_ignores_empty_image_and_zero_replicas() {
        let req: UpdateDeploymentRequest =
            serde_json::from_value(json!({"image": "", "replicas": 0})).unwrap();
        assert_eq!(req.image(), None);
        assert_eq!(req.replicas(), None);

        let req: UpdateDeploymentRequest = serde_json::from_value(json!({"replicas": 3})).unwrap();
        assert_eq!(req.replicas(), Some(3));
    }

    #[test]
    fn service_uses_camel_case_target_port() {
        let req: CreateServiceRequest =
            serde_json::from_value(json!({"name": "web", "port": 80, "targetPort": 8080})).unwrap();
        assert_eq!(req.target_port, 8080);
        assert!(req.validate().is_ok());
    }
}
