use std::env;

pub const DEFAULT_REQUIRED_ROLE: &str = "admin";

/// Bearer token verification settings.
///
/// Tokens are issued elsewhere; the gateway only needs the shared HS256
/// secret and the role identifier the role gate compares against the
/// `username` claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub required_role: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET").unwrap_or_else(|| "secret".to_string()),
            required_role: lookup("JWT_REQUIRED_ROLE")
                .filter(|role| !role.is_empty())
                .unwrap_or_else(|| DEFAULT_REQUIRED_ROLE.to_string()),
        }
    }
}
