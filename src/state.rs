use std::sync::Arc;

use anyhow::Context;
use forumgate_config::{BackendConfig, CorsConfig, JwtConfig};
use forumgate_rpc::{ForumClient, ServiceClients};
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
    pub clients: ServiceClients,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub backend_config: BackendConfig,
}

impl AppState {
    pub fn new(
        clients: ServiceClients,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        backend_config: BackendConfig,
    ) -> Self {
        Self {
            clients,
            jwt_config,
            cors_config,
            backend_config,
        }
    }
}

/// Reads configuration from the environment and connects the backend.
///
/// Fails if the forum service cannot be reached within the connect timeout.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let backend_config = BackendConfig::from_env();

    info!(
        addr = %backend_config.addr,
        connect_timeout_secs = backend_config.connect_timeout.as_secs(),
        "Connecting to forum service"
    );

    let client = ForumClient::connect(&backend_config)
        .await
        .with_context(|| format!("failed to connect to forum service at {}", backend_config.addr))?;

    info!("Forum service connection established");

    Ok(AppState::new(
        ServiceClients::from_shared(Arc::new(client)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        backend_config,
    ))
}
