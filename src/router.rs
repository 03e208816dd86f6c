use crate::logging::{logging_middleware, record_matched_path};
use crate::modules;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use forumgate_config::CorsConfig;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

pub fn init_router(state: AppState) -> Router {
    let api = modules::routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            debug!(
                method = %route.method,
                path = route.path,
                operation = route.operation,
                protection = ?route.protection,
                "Mounting route"
            );
            route.mount(router, &state)
        });

    Router::new()
        .route("/health", get(health))
        .nest("/v1", api)
        .route_layer(middleware::from_fn(record_matched_path))
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH]);

    // tower-http refuses a wildcard origin together with credentials
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}
