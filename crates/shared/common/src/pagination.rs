//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use domain::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

use crate::error::{AppError, AppResult};

/// Pagination query parameters (`?page=0&size=20&sort=name,desc`)
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    #[serde(default = "default_page")]
    pub page: u64,
    /// Requested page size
    #[serde(default = "default_size")]
    pub size: u64,
    /// Sort expression: `<field>` or `<field>,asc|desc`
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Get limit capped at maximum; a zero size falls back to the default
    pub fn limit(&self) -> u64 {
        if self.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.size.min(MAX_PAGE_SIZE)
        }
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit())
    }

    /// Parse the sort expression, if any
    pub fn sort_order(&self) -> AppResult<Option<SortOrder>> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(expr) => SortOrder::parse(expr).map(Some),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A single `field,direction` sort instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    fn parse(expr: &str) -> AppResult<Self> {
        let mut parts = expr.splitn(2, ',').map(str::trim);
        let field = parts.next().unwrap_or_default();
        if field.is_empty() {
            return Err(AppError::validation("Sort field cannot be empty"));
        }

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Invalid sort direction '{}'. Must be 'asc' or 'desc'",
                    other
                )))
            }
        };

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// One page of a larger result set plus count metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Create new page
    pub fn new(items: Vec<T>, page_number: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::new(0, 500).limit(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 0).limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn test_sort_order_parsing() {
        let request = PageRequest::default().with_sort("name,DESC");
        let order = request.sort_order().unwrap().unwrap();
        assert_eq!(order.field, "name");
        assert_eq!(order.direction, SortDirection::Desc);

        let request = PageRequest::default().with_sort("id");
        let order = request.sort_order().unwrap().unwrap();
        assert_eq!(order.direction, SortDirection::Asc);

        assert!(PageRequest::default().sort_order().unwrap().is_none());
    }

    #[test]
    fn test_sort_order_rejects_unknown_direction() {
        let request = PageRequest::default().with_sort("name,sideways");
        assert!(matches!(request.sort_order(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_page_total_pages() {
        let page = Page::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);

        let empty: Page<i32> = Page::new(Vec::new(), 0, DEFAULT_PAGE_SIZE, 0);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        assert_eq!(PageRequest::new(u64::MAX, 100).offset(), u64::MAX);
    }

    #[test]
    fn test_query_defaults() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.page, DEFAULT_PAGE_NUMBER);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert!(request.sort.is_none());
    }
}
