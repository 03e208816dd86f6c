//! # Forumgate Auth
//!
//! Bearer token verification for the Forumgate API gateway.
//!
//! - [`claims`]: the JWT claim set a principal token carries
//! - [`jwt`]: header parsing, signature/expiry verification and the role check
//!
//! Tokens are issued by an external authority. The gateway verifies each one
//! per request against the shared HS256 secret and keeps no session state.
//!
//! # Example
//!
//! ```ignore
//! use forumgate_auth::{bearer_token, verify_token};
//! use forumgate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = bearer_token("Bearer eyJhbGciOi...")?;
//! let claims = verify_token(token, &config)?;
//! println!("username: {}", claims.username);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
#[cfg(any(test, feature = "test-utils"))]
pub use jwt::create_token;
pub use jwt::{AuthError, BEARER_PREFIX, MIN_HEADER_LEN, bearer_token, check_role, verify_token};
