//! The generic request pipeline shared by every resource family.
//!
//! Each operation is a handler of the same shape: extract a
//! [`RequestInput`](input::RequestInput), run a binder from [`binder`] over
//! it, invoke one service method through [`pipeline::dispatch`] and write the
//! JSON response with the operation's success status. [`route::Route`]
//! describes where an operation is mounted and which gate protects it.

pub mod binder;
pub mod input;
pub mod pipeline;
pub mod route;

pub use binder::{Filters, Identified, Listing};
pub use input::RequestInput;
pub use pipeline::{Dispatched, Operation, dispatch};
pub use route::{Protection, Route};
