//! Bearer header parsing and JWT verification.
//!
//! The gate runs these steps in order and stops at the first failure:
//!
//! 1. The `Authorization` header must be present.
//! 2. It must be at least [`MIN_HEADER_LEN`] bytes and start with
//!    [`BEARER_PREFIX`]; anything else is rejected before verification.
//! 3. The remaining token must carry a valid HS256 signature and an
//!    unexpired `exp` claim.
//! 4. Optionally, the `username` claim must equal the required role.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use forumgate_config::JwtConfig;
use forumgate_core::AppError;

use crate::claims::Claims;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Shortest header that can hold the prefix plus a token.
pub const MIN_HEADER_LEN: usize = BEARER_PREFIX.len() + 1;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("authentication error")]
    RoleMismatch,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::unauthorized(err)
    }
}

/// Extracts the token from an `Authorization` header value.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    if header.len() < MIN_HEADER_LEN {
        return Err(AuthError::MalformedHeader);
    }

    header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedHeader)
}

/// Verifies the token signature and expiry, returning its claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // no grace period past `exp`
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(AuthError::from)
}

/// Role gate: the `username` claim must equal `required_role`.
pub fn check_role(claims: &Claims, required_role: &str) -> Result<(), AuthError> {
    if claims.username != required_role {
        return Err(AuthError::RoleMismatch);
    }
    Ok(())
}

/// Issues a token for tests. `ttl_secs` may be negative to mint an expired one.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_token(
    username: &str,
    ttl_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let now = Utc::now().timestamp();
    let claims = Claims {
        username: username.to_string(),
        exp: (now + ttl_secs).max(0) as usize,
        iat: Some(now as usize),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
}
