use serde::{Deserialize, Serialize};

/// JWT claims carried by a dashboard session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds). The token is invalid from this instant on.
    pub exp: i64,
    /// Random token id, reserved for a revocation list.
    pub jti: String,
}
