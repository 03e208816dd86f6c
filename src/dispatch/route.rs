use axum::{
    Router,
    handler::Handler,
    http::Method,
    middleware,
    routing::{self, MethodRouter},
};

use crate::middleware::auth::{require_bearer, require_role};
use crate::state::AppState;

/// Gate applied to a route before its handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Open,
    Bearer,
    Role,
}

/// One row of the route table.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub operation: &'static str,
    pub protection: Protection,
    handler: MethodRouter<AppState>,
}

impl Route {
    fn new(
        method: Method,
        path: &'static str,
        operation: &'static str,
        handler: MethodRouter<AppState>,
    ) -> Self {
        Self {
            method,
            path,
            operation,
            protection: Protection::Open,
            handler,
        }
    }

    pub fn get<H, T>(path: &'static str, operation: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::GET, path, operation, routing::get(handler))
    }

    pub fn post<H, T>(path: &'static str, operation: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::POST, path, operation, routing::post(handler))
    }

    pub fn put<H, T>(path: &'static str, operation: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::PUT, path, operation, routing::put(handler))
    }

    pub fn delete<H, T>(path: &'static str, operation: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::DELETE, path, operation, routing::delete(handler))
    }

    pub fn protected(mut self, protection: Protection) -> Self {
        self.protection = protection;
        self
    }

    /// Adds this route to `router`, wrapped in its gate.
    ///
    /// Routes sharing a path are merged into one method router by axum.
    pub fn mount(self, router: Router<AppState>, state: &AppState) -> Router<AppState> {
        let handler = match self.protection {
            Protection::Open => self.handler,
            Protection::Bearer => self
                .handler
                .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer)),
            Protection::Role => self
                .handler
                .route_layer(middleware::from_fn_with_state(state.clone(), require_role)),
        };
        router.route(self.path, handler)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("operation", &self.operation)
            .field("protection", &self.protection)
            .finish_non_exhaustive()
    }
}
