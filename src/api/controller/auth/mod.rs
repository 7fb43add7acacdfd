use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::util::json::parse_body;
use crate::app_state::AppState;
use crate::domain::auth::dto::{LoginRequest, LoginResponse, TokenStatusResponse};
use crate::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn login(
        State(state): State<AppState>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Json<LoginResponse>, AppError> {
        let req = parse_body(payload)?;
        state.auth_service.login(req).map(Json)
    }

    pub async fn validate_token(
        State(state): State<AppState>,
        headers: HeaderMap,
    ) -> Result<Json<TokenStatusResponse>, AppError> {
        let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        state.auth_service.validate_token(header).map(Json)
    }
}
