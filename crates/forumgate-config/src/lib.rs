//! # Forumgate Config
//!
//! Configuration types for the Forumgate API gateway, loaded from environment
//! variables (a `.env` file is read by the binary before any of these run):
//!
//! - [`server`]: listening address and log output format
//! - [`backend`]: forum service address, timeouts and error exposure
//! - [`jwt`]: bearer token verification secret and required role
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! Each type has a `from_env()` constructor and a `from_lookup()` variant that
//! reads from any key/value source, which keeps tests off the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use forumgate_config::{BackendConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let backend = BackendConfig::from_env();
//! let jwt = JwtConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod backend;
pub mod cors;
pub mod jwt;
pub mod server;

pub use backend::BackendConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::{LogFormat, ServerConfig};

/// Parses `key` from `lookup`, falling back to `default` when the variable is
/// unset or unparseable.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
