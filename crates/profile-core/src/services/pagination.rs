//! Page clamping and navigation metadata

use serde::Serialize;

use profile_shared::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE, USERS_ROUTE,
};
use profile_shared::PageQuery;

use crate::domain::PageList;

/// Page window after clamping, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn clamp(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = page_number
            .unwrap_or(DEFAULT_PAGE_NUMBER as i64)
            .clamp(DEFAULT_PAGE_NUMBER as i64, u32::MAX as i64) as u32;
        let page_size = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u32;

        Self { page_number, page_size }
    }

    pub fn from_query(query: &PageQuery) -> Self {
        Self::clamp(query.page_number(), query.page_size())
    }
}

/// Body of the `X-Pagination` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginationMetadata {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: usize,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: usize,
}

impl PaginationMetadata {
    pub fn from_page<T>(page: &PageList<T>, base_url: &str) -> Self {
        let previous_page_link = page
            .has_previous()
            .then(|| page_link(base_url, page.page_number - 1, page.page_size));
        let next_page_link = page
            .has_next()
            .then(|| page_link(base_url, page.page_number + 1, page.page_size));

        Self {
            previous_page_link,
            next_page_link,
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.page_number,
            total_pages: page.total_pages(),
        }
    }
}

pub fn page_link(base_url: &str, page_number: u32, page_size: u32) -> String {
    format!(
        "{}{}?pageNumber={}&pageSize={}",
        base_url.trim_end_matches('/'),
        USERS_ROUTE,
        page_number,
        page_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PageRequest::clamp(None, None), PageRequest { page_number: 1, page_size: 10 });
    }

    #[test]
    fn test_page_number_floor() {
        assert_eq!(PageRequest::clamp(Some(0), None).page_number, 1);
        assert_eq!(PageRequest::clamp(Some(-7), None).page_number, 1);
        assert_eq!(PageRequest::clamp(Some(4), None).page_number, 4);
    }

    #[test]
    fn test_page_size_bounds() {
        assert_eq!(PageRequest::clamp(None, Some(0)).page_size, 1);
        assert_eq!(PageRequest::clamp(None, Some(-3)).page_size, 1);
        assert_eq!(PageRequest::clamp(None, Some(100)).page_size, 20);
        assert_eq!(PageRequest::clamp(None, Some(20)).page_size, 20);
        assert_eq!(PageRequest::clamp(None, Some(7)).page_size, 7);
    }

    #[test]
    fn test_from_query_with_garbage() {
        let query = PageQuery {
            page_number: Some("two".to_string()),
            page_size: Some("5".to_string()),
        };
        assert_eq!(PageRequest::from_query(&query), PageRequest { page_number: 1, page_size: 5 });
    }

    #[test]
    fn test_metadata_first_page() {
        let page: PageList<u8> = PageList::new(vec![0; 10], 30, 1, 10);
        let metadata = PaginationMetadata::from_page(&page, "http://localhost:5000/");

        assert!(metadata.previous_page_link.is_none());
        assert_eq!(
            metadata.next_page_link.as_deref(),
            Some("http://localhost:5000/api/users?pageNumber=2&pageSize=10")
        );
        assert_eq!(metadata.total_pages, 3);
        assert_eq!(metadata.current_page, 1);
    }

    #[test]
    fn test_metadata_middle_page() {
        let page: PageList<u8> = PageList::new(vec![0; 10], 30, 2, 10);
        let metadata = PaginationMetadata::from_page(&page, "http://host");

        assert_eq!(
            metadata.previous_page_link.as_deref(),
            Some("http://host/api/users?pageNumber=1&pageSize=10")
        );
        assert_eq!(
            metadata.next_page_link.as_deref(),
            Some("http://host/api/users?pageNumber=3&pageSize=10")
        );
    }

    #[test]
    fn test_metadata_header_keys() {
        let page: PageList<u8> = PageList::new(vec![], 0, 1, 10);
        let json = serde_json::to_value(PaginationMetadata::from_page(&page, "http://host")).unwrap();

        assert!(json["PreviousPageLink"].is_null());
        assert!(json["NextPageLink"].is_null());
        assert_eq!(json["TotalCount"], 0);
        assert_eq!(json["PageSize"], 10);
        assert_eq!(json["CurrentPage"], 1);
        assert_eq!(json["TotalPages"], 0);
    }
}
