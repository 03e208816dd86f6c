//! Forum service (gRPC backend) configuration.
//!
//! # Environment Variables
//!
//! - `FORUM_SERVICE_ADDR`: backend URI (default: `http://forum_service:8082`)
//! - `BACKEND_CONNECT_TIMEOUT_SECS`: startup connect timeout (default: 5)
//! - `BACKEND_REQUEST_TIMEOUT_SECS`: per-call deadline, unset for none
//! - `EXPOSE_BACKEND_ERRORS`: pass backend error text to clients (default: true)

use std::env;
use std::time::Duration;

use crate::parse_or;

pub const DEFAULT_FORUM_SERVICE_ADDR: &str = "http://forum_service:8082";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub addr: String,
    pub connect_timeout: Duration,
    pub request_timeout: Option<Duration>,
    pub expose_errors: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_FORUM_SERVICE_ADDR.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: None,
            expose_errors: true,
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            addr: lookup("FORUM_SERVICE_ADDR")
                .map(|addr| with_scheme(addr.trim()))
                .unwrap_or(defaults.addr),
            connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BACKEND_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )),
            request_timeout: lookup("BACKEND_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            expose_errors: parse_or(&lookup, "EXPOSE_BACKEND_ERRORS", defaults.expose_errors),
        }
    }
}

/// `forum_service:8082` is accepted and treated as plaintext HTTP/2.
fn with_scheme(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}
