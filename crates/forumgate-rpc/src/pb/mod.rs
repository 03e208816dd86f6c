//! Message types of the `forum.v1` protobuf package.
//!
//! Kept by hand in the shape `prost-build` emits, with serde derives added so
//! the same values are bound from request JSON and written back as response
//! JSON. Every message is `#[serde(default)]`: absent JSON fields take their
//! proto3 zero value, mirroring how the backend reads them.

pub mod category;
pub mod comment;
pub mod post;
pub mod posttag;
pub mod tag;
