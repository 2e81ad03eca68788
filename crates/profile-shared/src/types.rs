//! Common types

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Raw paging parameters as they arrive on the query string.
///
/// Values stay textual so that a garbage `pageSize=abc` degrades to the default
/// instead of rejecting the whole listing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn new(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page_number: page_number.map(|n| n.to_string()),
            page_size: page_size.map(|n| n.to_string()),
        }
    }

    /// Builds the query from raw `key=value` pairs. Keys match case-insensitively
    /// and a repeated key keeps its last value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            if key.eq_ignore_ascii_case("pageNumber") {
                query.page_number = Some(value.clone());
            } else if key.eq_ignore_ascii_case("pageSize") {
                query.page_size = Some(value.clone());
            }
        }
        query
    }

    pub fn page_number(&self) -> Option<i64> {
        parse_number(self.page_number.as_deref())
    }

    pub fn page_size(&self) -> Option<i64> {
        parse_number(self.page_size.as_deref())
    }
}

/// Integers beyond the i64 range saturate so they clamp like any other out-of-range value.
fn parse_number(raw: Option<&str>) -> Option<i64> {
    match raw?.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_parses_numbers() {
        let query = PageQuery::new(Some(3), Some(15));
        assert_eq!(query.page_number(), Some(3));
        assert_eq!(query.page_size(), Some(15));
    }

    #[test]
    fn test_page_query_ignores_garbage() {
        let query = PageQuery {
            page_number: Some("abc".to_string()),
            page_size: Some("".to_string()),
        };
        assert_eq!(query.page_number(), None);
        assert_eq!(query.page_size(), None);
    }

    #[test]
    fn test_page_query_keeps_negative_values() {
        let query = PageQuery::new(Some(-4), Some(0));
        assert_eq!(query.page_number(), Some(-4));
        assert_eq!(query.page_size(), Some(0));
    }

    #[test]
    fn test_page_query_saturates_huge_values() {
        let query = PageQuery {
            page_number: Some("99999999999999999999".to_string()),
            page_size: Some("-99999999999999999999".to_string()),
        };
        assert_eq!(query.page_number(), Some(i64::MAX));
        assert_eq!(query.page_size(), Some(i64::MIN));
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let pairs = vec![
            ("pageSize".to_string(), "5".to_string()),
            ("pagenumber".to_string(), "2".to_string()),
            ("pageSize".to_string(), "7".to_string()),
            ("sort".to_string(), "login".to_string()),
        ];
        let query = PageQuery::from_pairs(&pairs);
        assert_eq!(query.page_number(), Some(2));
        assert_eq!(query.page_size(), Some(7));
    }
}
