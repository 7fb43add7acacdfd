//! Session gate in front of every protected route.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::app_state::AppState;
use crate::domain::auth::token_service::{extract_bearer, TokenError, TokenService};
use crate::errors::AppError;

const UNAUTHORIZED: &str = "Unauthorized";

/// Identity of the caller, placed in request extensions once the gate admits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Admitted(AuthenticatedUser),
    Rejected(TokenError),
}

pub struct AccessGate {
    tokens: Arc<TokenService>,
}

impl AccessGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub fn inspect(&self, headers: &HeaderMap) -> GateDecision {
        let header = match headers.get(AUTHORIZATION).map(|v| v.to_str()) {
            None => None,
            Some(Ok(value)) => Some(value),
            Some(Err(_)) => {
                return GateDecision::Rejected(TokenError::Malformed("non-ASCII authorization header".into()))
            }
        };

        match extract_bearer(header).and_then(|token| self.tokens.verify(token)) {
            Ok(claims) => GateDecision::Admitted(AuthenticatedUser { username: claims.sub }),
            Err(reason) => GateDecision::Rejected(reason),
        }
    }
}

/// `from_fn_with_state` middleware: admit with a valid token, otherwise 401
/// before the handler runs.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match state.access_gate.inspect(req.headers()) {
        GateDecision::Admitted(user) => {
            debug!("Admitted {} {} for user '{}'", req.method(), req.uri().path(), user.username);
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        GateDecision::Rejected(reason) => {
            warn!("Rejected {} {}: {}", req.method(), req.uri().path(), reason);
            AppError::Unauthorized(UNAUTHORIZED.to_string()).into_response()
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::{Duration, Utc};

    fn gate() -> (AccessGate, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("gate-secret").unwrap());
        (AccessGate::new(tokens.clone()), tokens)
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn admits_valid_bearer_token() {
        let (gate, tokens) = gate();
        let token = tokens.issue("admin").unwrap().token;
        assert_eq!(
            gate.inspect(&headers(&format!("Bearer {token}"))),
            GateDecision::Admitted(AuthenticatedUser { username: "admin".into() })
        );
    }

    #[test]
    fn rejects_with_distinct_reasons() {
        let (gate, tokens) = gate();
        assert_eq!(gate.inspect(&HeaderMap::new()), GateDecision::Rejected(TokenError::MissingHeader));
        assert_eq!(gate.inspect(&headers("Bearer ")), GateDecision::Rejected(TokenError::EmptyToken));

        let expired = tokens.issue_at("admin", Utc::now() - Duration::hours(25)).unwrap().token;
        assert_eq!(
            gate.inspect(&headers(&format!("Bearer {expired}"))),
            GateDecision::Rejected(TokenError::Expired)
        );
    }
}
