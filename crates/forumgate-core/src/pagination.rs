//! Pagination normalization for list endpoints.
//!
//! Every list endpoint accepts two optional query parameters:
//!
//! - `page`: 1-indexed page number (default: 1)
//! - `limit`: items per page (default: 10)
//!
//! Absent or empty values fall back to the defaults. A value that is present
//! but is not a base-10 32-bit integer, or is below 1, is rejected with a
//! [`PaginationError`] naming the offending field. No upper bound is applied
//! to `limit`; that policy belongs to the backend.
//!
//! # Example
//!
//! ```ignore
//! // GET /v1/posts?page=3
//! let pagination = Pagination::from_query(Some("3"), None)?;
//! assert_eq!(pagination, Pagination { page: 3, limit: 10 });
//! ```

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_LIMIT: i32 = 10;

/// Rejection produced when a pagination parameter cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid {field} parameter: {value:?} is not a base-10 integer")]
    NotANumber { field: &'static str, value: String },
    #[error("invalid {field} parameter: must be at least 1, got {value}")]
    NotPositive { field: &'static str, value: i32 },
}

impl PaginationError {
    /// Name of the query parameter that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotANumber { field, .. } | Self::NotPositive { field, .. } => field,
        }
    }
}

/// Resolved pagination: both values are always present and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
    pub page: i32,
    pub limit: i32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Resolves raw `page` and `limit` query values.
    ///
    /// `page` is checked first, so when both are malformed the error names
    /// `page`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Result<Self, PaginationError> {
        Ok(Self {
            page: resolve("page", page, DEFAULT_PAGE)?,
            limit: resolve("limit", limit, DEFAULT_LIMIT)?,
        })
    }
}

fn resolve(field: &'static str, raw: Option<&str>, default: i32) -> Result<i32, PaginationError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default),
    };

    let value = raw
        .parse::<i32>()
        .map_err(|_| PaginationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;

    if value < 1 {
        return Err(PaginationError::NotPositive { field, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_use_defaults() {
        let pagination = Pagination::from_query(None, None).unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let pagination = Pagination::from_query(Some(""), Some("")).unwrap();
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_explicit_values() {
        let pagination = Pagination::from_query(Some("2"), Some("5")).unwrap();
        assert_eq!(pagination, Pagination { page: 2, limit: 5 });
    }

    #[test]
    fn test_only_page_given() {
        let pagination = Pagination::from_query(Some("7"), None).unwrap();
        assert_eq!(pagination, Pagination { page: 7, limit: 10 });
    }

    #[test]
    fn test_only_limit_given() {
        let pagination = Pagination::from_query(None, Some("30")).unwrap();
        assert_eq!(pagination, Pagination { page: 1, limit: 30 });
    }

    #[test]
    fn test_no_upper_bound_on_limit() {
        let pagination = Pagination::from_query(None, Some("5000")).unwrap();
        assert_eq!(pagination.limit, 5000);
    }

    #[test]
    fn test_non_numeric_page_rejected() {
        let err = Pagination::from_query(Some("abc"), None).unwrap_err();
        assert_eq!(err.field(), "page");
        assert!(matches!(err, PaginationError::NotANumber { .. }));
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        let err = Pagination::from_query(Some("1"), Some("ten")).unwrap_err();
        assert_eq!(err.field(), "limit");
    }

    #[test]
    fn test_page_checked_before_limit() {
        let err = Pagination::from_query(Some("x"), Some("y")).unwrap_err();
        assert_eq!(err.field(), "page");
    }

    #[test]
    fn test_float_rejected() {
        let err = Pagination::from_query(Some("1.5"), None).unwrap_err();
        assert_eq!(err.field(), "page");
    }

    #[test]
    fn test_overflow_rejected() {
        let err = Pagination::from_query(None, Some("99999999999")).unwrap_err();
        assert_eq!(err.field(), "limit");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(Pagination::from_query(Some(" "), None).is_err());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let cases = vec![(Some("0"), None), (Some("-1"), None), (None, Some("0"))];

        for (page, limit) in cases {
            let err = Pagination::from_query(page, limit).unwrap_err();
            assert!(matches!(err, PaginationError::NotPositive { .. }));
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = Pagination::from_query(Some("two"), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid page parameter: "two" is not a base-10 integer"#
        );
    }

    #[test]
    fn test_serialize() {
        let serialized = serde_json::to_string(&Pagination { page: 3, limit: 20 }).unwrap();
        assert_eq!(serialized, r#"{"page":3,"limit":20}"#);
    }
}
