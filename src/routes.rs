use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::middleware::access_gate::require_auth;
use crate::api::routes::{auth_routes::auth_routes, info_routes::info_routes, metrics_routes::metrics_routes};
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;

    // Everything added before route_layer sits behind the access gate
    let protected = Router::new()
        .merge(info_routes())
        .nest("/metrics", metrics_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new().merge(auth_routes()).merge(protected);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api", api)

        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
