//! Resource endpoints against the in-memory cluster.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{app_with, authed_get, login_token, node, pod, send, FakeCluster};

fn authed_json(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_delete(uri: &str, token: &str) -> Request<Body> {
    Request::delete(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_deployment_lifecycle() {
    let cluster = Arc::new(FakeCluster::default());
    let app = app_with(cluster.clone(), None);
    let token = login_token(&app).await;

    let create = json!({"name": "web", "namespace": "shop", "image": "nginx:1.27", "replicas": 2, "port": 8080});
    let (status, body) = send(&app, authed_json("POST", "/api/deployments", &token, create.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "web");
    assert_eq!(body["replicas"], 2);

    let (status, _) = send(&app, authed_json("POST", "/api/deployments", &token, create)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        authed_json("PUT", "/api/deployments/shop/web", &token, json!({"replicas": 5, "image": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["replicas"], 5);
    let stored = cluster.deployments.lock().unwrap()[0].clone();
    let image = stored.spec.unwrap().template.spec.unwrap().containers[0].image.clone();
    assert_eq!(image.as_deref(), Some("nginx:1.27"));

    let (status, _) = send(&app, authed_delete("/api/deployments/shop/web", &token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, authed_get("/api/deployments/shop/web", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_deployment_rejects_invalid_port() {
    let cluster = Arc::new(FakeCluster::default());
    let app = app_with(cluster.clone(), None);
    let token = login_token(&app).await;

    let (status, _) = send(
        &app,
        authed_json(
            "POST",
            "/api/deployments",
            &token,
            json!({"name": "web", "image": "nginx", "port": 70000}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cluster.deployments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pod_logs_are_plain_text_with_tail() {
    let cluster = Arc::new(FakeCluster::default());
    cluster.pods.lock().unwrap().push(pod("default", "web-0", "Running"));
    let app = app_with(cluster, None);
    let token = login_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed_get("/api/pods/default/web-0/logs?tail=3", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), "line 1\nline 2\nline 3\n");

    let (status, _) = send(&app, authed_get("/api/pods/default/web-0/logs?tail=abc", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(authed_get("/api/pods/default/web-0/logs?tail=", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap().lines().count(), 100);
}

#[tokio::test]
async fn test_pod_delete_and_missing_pod() {
    let cluster = Arc::new(FakeCluster::default());
    cluster.pods.lock().unwrap().push(pod("default", "web-0", "Running"));
    let app = app_with(cluster.clone(), None);
    let token = login_token(&app).await;

    let (status, body) = send(&app, authed_get("/api/pods/default/web-0", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Running");

    let (status, _) = send(&app, authed_delete("/api/pods/default/web-0", &token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, authed_delete("/api/pods/default/web-0", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_namespace_create_and_list() {
    let app = app_with(Arc::new(FakeCluster::default()), None);
    let token = login_token(&app).await;

    let (status, body) = send(
        &app,
        authed_json("POST", "/api/namespaces", &token, json!({"name": "staging", "labels": {"team": "web"}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "staging");

    let (status, body) = send(&app, authed_get("/api/namespaces", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["labels"]["team"], "web");
}

#[tokio::test]
async fn test_cluster_health_and_info() {
    let cluster = Arc::new(FakeCluster::with_nodes(vec![
        node("node-1", true, "4", "8Gi"),
        node("node-2", false, "4", "8Gi"),
    ]));
    {
        let mut pods = cluster.pods.lock().unwrap();
        pods.push(pod("default", "web-0", "Running"));
        pods.push(pod("default", "job-0", "Failed"));
    }
    let app = app_with(cluster, None);
    let token = login_token(&app).await;

    let (status, body) = send(&app, authed_get("/api/cluster/health", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "nodes": {"total": 2, "healthy": 1},
            "pods": {"total": 2, "running": 1, "failed": 1},
            "overall": "Degraded"
        })
    );

    let (status, body) = send(&app, authed_get("/api/cluster/info", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "v1.31.2");
    assert_eq!(body["nodes"], 2);
    assert_eq!(body["healthy"], false);

    let (status, body) = send(&app, authed_get("/api/cluster/version", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gitVersion"], "v1.31.2");
    assert_eq!(body["platform"], "linux/amd64");
}
