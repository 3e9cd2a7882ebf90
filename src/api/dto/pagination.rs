//! Pagination query parameters for comment listings.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Upper bound on page size, a policy cap carried by the API contract.
pub const MAX_LIMIT: u32 = 10;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// # Validation
    ///
    /// - Page must be >= 1
    /// - Limit must be between 1 and 10
    ///
    /// # Returns
    ///
    /// `(page, limit)` for the service layer.
    pub fn validate(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(MAX_LIMIT);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {MAX_LIMIT}"));
        }

        Ok((page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, limit: Option<u32>) -> PaginationParams {
        PaginationParams { page, limit }
    }

    #[test]
    fn test_defaults() {
        let (page, limit) = params(None, None).validate().unwrap();
        assert_eq!(page, 1);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_explicit_values() {
        let (page, limit) = params(Some(3), Some(5)).validate().unwrap();
        assert_eq!(page, 3);
        assert_eq!(limit, 5);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate().is_err());
    }

    #[test]
    fn test_limit_zero_is_error() {
        assert!(params(None, Some(0)).validate().is_err());
    }

    #[test]
    fn test_limit_at_cap_is_ok() {
        assert!(params(None, Some(10)).validate().is_ok());
    }

    #[test]
    fn test_limit_above_cap_is_error() {
        assert!(params(None, Some(11)).validate().is_err());
    }

    #[test]
    fn test_query_string_values_parse() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"page": "2", "limit": "5"}"#).unwrap();
        let (page, limit) = p.validate().unwrap();
        assert_eq!(page, 2);
        assert_eq!(limit, 5);
    }
}
