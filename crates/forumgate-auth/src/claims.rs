use serde::{Deserialize, Serialize};

/// JWT claims carried by a principal token.
///
/// `username` doubles as the role identifier for the role gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix seconds), when the issuer sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}
