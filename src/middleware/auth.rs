use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use forumgate_auth::{AuthError, Claims, bearer_token, check_role, verify_token};
use forumgate_config::JwtConfig;
use forumgate_core::AppError;
use tracing::warn;

use crate::state::AppState;

/// Runs the bearer checks against a request's headers.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let token = bearer_token(value)?;
    verify_token(token, jwt_config)
}

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// Verified claims are stored in the request extensions for the handler.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticate(req.headers(), &state.jwt_config) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => reject(req.uri().path(), err),
    }
}

/// Bearer check followed by the role check on the `username` claim.
pub async fn require_role(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let verified = authenticate(req.headers(), &state.jwt_config).and_then(|claims| {
        check_role(&claims, &state.jwt_config.required_role)?;
        Ok(claims)
    });

    match verified {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => reject(req.uri().path(), err),
    }
}

fn reject(path: &str, err: AuthError) -> Response {
    warn!(path = %path, error = %err, "Authentication failed");
    AppError::from(err).into_response()
}

/// Extractor for the principal verified by one of the gates above.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::from(AuthError::MissingHeader))
    }
}
