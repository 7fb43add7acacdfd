use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::errors::AppError;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

pub fn to_json<T: serde::Serialize>(result: Result<T, AppError>) -> Result<Json<T>, AppError> {
    result.map(Json)
}

/// 201 with the created resource.
pub fn to_created<T: serde::Serialize>(result: Result<T, AppError>) -> Result<(StatusCode, Json<T>), AppError> {
    result.map(|value| (StatusCode::CREATED, Json(value)))
}

/// 204 with no body.
pub fn to_no_content(result: Result<(), AppError>) -> Result<StatusCode, AppError> {
    result.map(|()| StatusCode::NO_CONTENT)
}

/// Unwrap a JSON body, turning any decode failure into a 400.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        AppError::Malformed(INVALID_REQUEST_BODY.to_string())
    })
}
