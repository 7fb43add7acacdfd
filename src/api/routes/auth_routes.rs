//! Public session routes (e.g., /api/login)

use axum::routing::{get, post};
use axum::Router;

use crate::api::controller::auth::AuthController;
use crate::app_state::AppState;

/// Build the router for the unauthenticated endpoints under /api
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(AuthController::login))
        .route("/validate-token", get(AuthController::validate_token))
}
