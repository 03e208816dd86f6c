use std::collections::HashMap;

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::PathRejection},
};
use forumgate_core::AppError;
use forumgate_rpc::CallContext;

use crate::logging::RequestId;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Everything a binder may read from an inbound request.
#[derive(Debug)]
pub struct RequestInput {
    pub path: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Bytes,
    pub context: CallContext,
}

impl FromRequest<AppState> for RequestInput {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let path = match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
        {
            Ok(Path(params)) => params,
            Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
            Err(rejection) => return Err(AppError::bad_request(anyhow!(rejection.body_text()))),
        };

        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::bad_request(anyhow!(rejection.body_text())))?;

        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let mut context =
            CallContext::new(request_id).with_timeout(state.backend_config.request_timeout);
        if let Ok(user) = AuthUser::from_request_parts(&mut parts, state).await {
            context = context.with_username(user.username());
        }

        let body = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!(rejection.body_text())))?;

        Ok(Self {
            path,
            query,
            body,
            context,
        })
    }
}

impl RequestInput {
    /// Input with no path, query or body, for binding tests.
    pub fn empty() -> Self {
        Self {
            path: HashMap::new(),
            query: HashMap::new(),
            body: Bytes::new(),
            context: CallContext::generate(),
        }
    }

    pub fn with_path(mut self, name: &str, value: &str) -> Self {
        self.path.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}
