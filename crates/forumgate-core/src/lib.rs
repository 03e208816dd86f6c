//! # Forumgate Core
//!
//! Foundational types shared by every Forumgate crate:
//!
//! - [`errors`]: the gateway error type and its `{"error": ...}` rendering
//! - [`pagination`]: `page`/`limit` query normalization
//!
//! # Example
//!
//! ```ignore
//! use forumgate_core::{AppError, Pagination};
//!
//! let pagination = Pagination::from_query(Some("2"), None)
//!     .map_err(AppError::bad_request)?;
//! assert_eq!(pagination.limit, 10);
//! ```

pub mod errors;
pub mod pagination;

pub use errors::AppError;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, PaginationError};
