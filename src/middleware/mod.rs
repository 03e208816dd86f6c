//! Request gates applied per route.
//!
//! - [`auth::require_bearer`]: any valid bearer token
//! - [`auth::require_role`]: valid token whose `username` claim equals the
//!   configured role
//!
//! Both run as `route_layer`s built with `from_fn_with_state`, so an
//! unmatched path still falls through to 404 without an auth check. On
//! success the verified [`forumgate_auth::Claims`] are inserted into the
//! request extensions, where [`auth::AuthUser`] and the dispatcher pick
//! them up.

pub mod auth;
