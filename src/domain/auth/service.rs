use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::domain::auth::credentials::AdminCredentials;
use crate::domain::auth::dto::{LoginRequest, LoginResponse, TokenStatusResponse};
use crate::domain::auth::token_service::{extract_bearer, TokenError, TokenService};
use crate::errors::{internal_error, AppError};

pub struct AuthService {
    credentials: AdminCredentials,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(credentials: AdminCredentials, tokens: Arc<TokenService>) -> Self {
        Self { credentials, tokens }
    }

    /// Check the administrator credentials and mint a session token.
    pub fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        req.validate()?;

        if !self.credentials.matches(&req.username, &req.password) {
            warn!("Rejected login attempt for user '{}'", req.username);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let issued = self.tokens.issue(&req.username).map_err(internal_error)?;
        info!("Issued session token for user '{}' (jti {})", issued.claims.sub, issued.claims.jti);

        Ok(LoginResponse { token: issued.token })
    }

    /// Report whether the presented `Authorization` header carries a live token.
    pub fn validate_token(&self, header: Option<&str>) -> Result<TokenStatusResponse, AppError> {
        let claims = extract_bearer(header)
            .and_then(|token| self.tokens.verify(token))
            .map_err(|err| {
                warn!("Token validation failed: {}", err);
                let message = match err {
                    TokenError::MissingHeader => "Authorization header required",
                    TokenError::EmptyToken => "Token required",
                    _ => "Invalid token",
                };
                AppError::Unauthorized(message.to_string())
            })?;

        Ok(TokenStatusResponse {
            status: "valid".to_string(),
            username: claims.sub,
        })
    }
}
