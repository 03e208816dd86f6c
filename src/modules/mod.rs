//! Resource families exposed by the gateway.
//!
//! Each family follows the same layout:
//!
//! - `model.rs`: binding glue between request input and its backend messages
//! - `controller.rs`: one handler per operation, all built on
//!   [`crate::dispatch::dispatch`]
//! - `router.rs`: the family's rows of the route table

pub mod categories;
pub mod comments;
pub mod posts;
pub mod posttags;
pub mod tags;

use crate::dispatch::Route;

/// The complete route table, relative to the `/v1` prefix.
pub fn routes() -> Vec<Route> {
    [
        categories::router::routes(),
        tags::router::routes(),
        posts::router::routes(),
        comments::router::routes(),
        posttags::router::routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
