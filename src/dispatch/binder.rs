//! Turns a [`RequestInput`] into the typed request for one operation.
//!
//! Binders check shape only: JSON syntax and field types, pagination and
//! presence of path parameters. Domain rules belong to the backend.

use std::collections::HashMap;

use anyhow::anyhow;
use forumgate_core::{AppError, Pagination};
use serde::de::DeserializeOwned;

use super::input::RequestInput;

/// Request types addressed by a single path identifier.
pub trait Identified {
    fn set_id(&mut self, id: String);
}

/// List request types carrying pagination and optional string filters.
pub trait Listing {
    fn paginate(&mut self, pagination: Pagination);

    fn apply_filters(&mut self, _filters: &Filters<'_>) {}
}

/// Read-only view over the query string for list filters.
pub struct Filters<'a>(&'a HashMap<String, String>);

impl Filters<'_> {
    /// The filter value, or an empty string meaning "no filter".
    pub fn get(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }
}

/// Implements [`Identified`] for request types whose identifier field is `id`.
macro_rules! identified_by_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dispatch::Identified for $ty {
                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

/// Implements [`Listing`] for list requests with pagination and no filters.
macro_rules! paginated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dispatch::Listing for $ty {
                fn paginate(&mut self, pagination: forumgate_core::Pagination) {
                    self.page = pagination.page;
                    self.limit = pagination.limit;
                }
            }
        )+
    };
}

pub(crate) use identified_by_id;
pub(crate) use paginated;

pub fn path_param(input: &RequestInput, name: &str) -> Result<String, AppError> {
    input
        .path
        .get(name)
        .cloned()
        .ok_or_else(|| AppError::bad_request(anyhow!("missing path parameter: {name}")))
}

/// Decodes the body. An empty or whitespace-only body is rejected.
pub fn json_body<T: DeserializeOwned>(input: &RequestInput) -> Result<T, AppError> {
    if input.body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::bad_request(anyhow!("invalid request body: empty body")));
    }

    serde_json::from_slice(&input.body)
        .map_err(|err| AppError::bad_request(anyhow!("invalid request body: {err}")))
}

/// Decodes the body, then overwrites its identifier with the `{id}` path segment.
pub fn json_body_with_id<T>(input: &RequestInput) -> Result<T, AppError>
where
    T: DeserializeOwned + Identified,
{
    let mut request: T = json_body(input)?;
    request.set_id(path_param(input, "id")?);
    Ok(request)
}

pub fn by_id<T>(input: &RequestInput) -> Result<T, AppError>
where
    T: Default + Identified,
{
    let mut request = T::default();
    request.set_id(path_param(input, "id")?);
    Ok(request)
}

pub fn listing<T>(input: &RequestInput) -> Result<T, AppError>
where
    T: Default + Listing,
{
    let pagination = Pagination::from_query(
        input.query.get("page").map(String::as_str),
        input.query.get("limit").map(String::as_str),
    )
    .map_err(AppError::bad_request)?;

    let mut request = T::default();
    request.paginate(pagination);
    request.apply_filters(&Filters(&input.query));
    Ok(request)
}

/// A listing scoped to the resource named by the `{id}` path segment.
pub fn listing_by_id<T>(input: &RequestInput) -> Result<T, AppError>
where
    T: Default + Listing + Identified,
{
    let mut request: T = listing(input)?;
    request.set_id(path_param(input, "id")?);
    Ok(request)
}
