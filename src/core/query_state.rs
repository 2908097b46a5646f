//! Query state for list endpoints: search, paging, ordering and filters.

use crate::api::query::QueryParams;
use crate::core::filters::ListFilters;
use crate::core::services::types::ServiceError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ServiceError::Validation {
                field: "order".to_string(),
                message: format!("'{}' is not a sort order (expected asc or desc)", s),
            }),
        }
    }
}

/// Parameters of a list fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<F> {
    pub search: String,
    pub page: u32,
    pub items_per_page: u32,
    pub order: Option<SortOrder>,
    pub filters: F,
}

impl<F: Default> Default for QueryState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            order: None,
            filters: F::default(),
        }
    }
}

impl<F: ListFilters> QueryState<F> {
    /// Query parameters in wire order: search, page, itemsPerPage, order, filters.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_non_empty("search", &self.search);
        params.push("page", self.page);
        params.push("itemsPerPage", self.items_per_page);
        params.push_opt("order", self.order);
        self.filters.append_to(&mut params);
        params
    }
}

pub fn validate_page(page: u32) -> Result<(), ServiceError> {
    if page == 0 {
        return Err(ServiceError::Validation {
            field: "page".to_string(),
            message: "Page numbers start at 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_items_per_page(items_per_page: u32) -> Result<(), ServiceError> {
    if items_per_page == 0 {
        return Err(ServiceError::Validation {
            field: "itemsPerPage".to_string(),
            message: "Items per page must be greater than 0".to_string(),
        });
    }
    Ok(())
}
