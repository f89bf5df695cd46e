//! Page and search query resolution for the user list
//!
//! Raw request parameters arrive as untyped strings. This module parses
//! them, clamps the requested page into the valid range for the current
//! item count, and derives the offset/limit pair and the navigation
//! metadata the rendered page needs. Malformed input never fails; it
//! degrades to defaults.
//!
//! # Examples
//!
//! ```rust
//! use roster_core::pagination::{PageRequest, QueryParams};
//!
//! let params = QueryParams::from_pairs(vec![
//!     ("search".to_string(), "ali".to_string()),
//!     ("page".to_string(), "2".to_string()),
//! ]);
//!
//! let request = PageRequest::from_params(&params);
//! assert_eq!(request.search(), Some("ali"));
//!
//! // 20 matching users, 7 per page
//! let page = request.resolve(20, 7);
//! assert_eq!(page.page(), 2);
//! assert_eq!(page.offset(), 7);
//! assert_eq!(page.range_end(), 14);
//! ```

use std::collections::HashMap;

/// Default number of users shown per page
pub const DEFAULT_PAGE_SIZE: u32 = 7;

/// A query-string value: a single string, or several for a repeated key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

/// Untyped request parameters keyed by name
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, ParamValue>,
}

impl QueryParams {
    /// Build parameters from decoded key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, ParamValue> = HashMap::new();
        for (key, value) in pairs {
            match values.remove(&key) {
                None => {
                    values.insert(key, ParamValue::Single(value));
                }
                Some(ParamValue::Single(first)) => {
                    values.insert(key, ParamValue::Many(vec![first, value]));
                }
                Some(ParamValue::Many(mut all)) => {
                    all.push(value);
                    values.insert(key, ParamValue::Many(all));
                }
            }
        }
        Self { values }
    }

    /// Value for `key`, only when it was supplied exactly once
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ParamValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether any value is present for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// A parsed but not yet clamped page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    search: Option<String>,
    requested_page: Option<u32>,
}

impl PageRequest {
    /// Extract the recognized parameters from a raw query
    ///
    /// `search` is used only when supplied as a single string; `page` only
    /// when it parses as a positive integer. Anything else counts as
    /// absent.
    pub fn from_params(params: &QueryParams) -> Self {
        let search = params.single("search").map(str::to_owned);
        let requested_page = params
            .single("page")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1);

        Self {
            search,
            requested_page,
        }
    }

    /// The active substring filter, if any
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The requested page number, if it was a valid positive integer
    pub fn requested_page(&self) -> Option<u32> {
        self.requested_page
    }

    /// Clamp the request against the current item count.
    ///
    /// A numeric request beyond the last page clamps to the last page
    /// (floor 1); absent or non-numeric requests fall back to page 1.
    pub fn resolve(&self, total_items: u64, page_size: u32) -> ResolvedPage {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(u64::from(page_size)) as u32;
        let page = match self.requested_page {
            Some(requested) => requested.min(total_pages).max(1),
            None => 1,
        };

        ResolvedPage {
            search: self.search.clone(),
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

/// Fully resolved pagination state for one request
///
/// Derived per request from the parameters and the matching item count;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    search: Option<String>,
    page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u32,
}

impl ResolvedPage {
    /// The active substring filter, if any
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The clamped, 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Configured page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total number of matching items
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Total number of pages; zero when there are no items
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Row offset of this page in the full result set
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Maximum number of rows on this page
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// 1-based index of the first displayed row
    pub fn range_start(&self) -> u64 {
        self.offset() + 1
    }

    /// 1-based index of the last displayed row
    pub fn range_end(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total_items)
    }

    /// Target of the "previous" control; `None` renders it disabled
    pub fn prev_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Target of the "next" control; `None` renders it disabled
    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    /// Whether there are no matching items at all
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_single_value_extraction() {
        let params = params(&[("search", "ali"), ("page", "2")]);
        assert_eq!(params.single("search"), Some("ali"));
        assert_eq!(params.single("page"), Some("2"));
        assert_eq!(params.single("missing"), None);
    }

    #[test]
    fn test_repeated_key_counts_as_absent() {
        let params = params(&[("search", "a"), ("search", "b"), ("page", "2")]);
        assert!(params.contains("search"));
        assert_eq!(params.single("search"), None);

        let request = PageRequest::from_params(&params);
        assert_eq!(request.search(), None);
        assert_eq!(request.requested_page(), Some(2));
    }

    #[test]
    fn test_page_parsing() {
        for (raw, expected) in [
            ("3", Some(3)),
            (" 3 ", Some(3)),
            ("0", None),
            ("-1", None),
            ("abc", None),
            ("3.5", None),
            ("", None),
        ] {
            let request = PageRequest::from_params(&params(&[("page", raw)]));
            assert_eq!(request.requested_page(), expected, "raw page {:?}", raw);
        }
    }

    #[test]
    fn test_total_pages_computation() {
        assert_eq!(PageRequest::from_params(&params(&[])).resolve(20, 7).total_pages(), 3);
        assert_eq!(PageRequest::from_params(&params(&[])).resolve(21, 7).total_pages(), 3);
        assert_eq!(PageRequest::from_params(&params(&[])).resolve(22, 7).total_pages(), 4);
        assert_eq!(PageRequest::from_params(&params(&[])).resolve(0, 7).total_pages(), 0);
        assert_eq!(PageRequest::from_params(&params(&[])).resolve(1, 7).total_pages(), 1);
    }

    #[test]
    fn test_default_page_when_absent() {
        let page = PageRequest::from_params(&params(&[])).resolve(20, 7);
        assert_eq!(page.page(), 1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.range_start(), 1);
        assert_eq!(page.range_end(), 7);
        assert_eq!(page.prev_page(), None);
        assert_eq!(page.next_page(), Some(2));
    }

    #[test]
    fn test_last_page_range() {
        let page = PageRequest::from_params(&params(&[("page", "3")])).resolve(20, 7);
        assert_eq!(page.page(), 3);
        assert_eq!(page.range_start(), 15);
        assert_eq!(page.range_end(), 20);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.prev_page(), Some(2));
    }

    #[test]
    fn test_overshoot_clamps_to_last_page() {
        let page = PageRequest::from_params(&params(&[("page", "99")])).resolve(20, 7);
        assert_eq!(page.page(), 3);
        assert_eq!(page.range_end(), 20);
    }

    #[test]
    fn test_resolved_page_always_in_range() {
        for raw in ["0", "-5", "junk", "1", "2", "3", "4", "1000000"] {
            for total in [0u64, 1, 6, 7, 8, 20, 100] {
                let page = PageRequest::from_params(&params(&[("page", raw)])).resolve(total, 7);
                let upper = page.total_pages().max(1);
                assert!(
                    page.page() >= 1 && page.page() <= upper,
                    "page {} out of [1, {}] for raw {:?} total {}",
                    page.page(),
                    upper,
                    raw,
                    total
                );
            }
        }
    }

    #[test]
    fn test_empty_result_set() {
        let page = PageRequest::from_params(&params(&[("page", "5")])).resolve(0, 7);
        assert_eq!(page.page(), 1);
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.range_end(), 0);
        assert!(page.is_empty());
        assert_eq!(page.prev_page(), None);
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_range_invariants() {
        for total in 1u64..=30 {
            for requested in 1u32..=6 {
                let raw = requested.to_string();
                let page =
                    PageRequest::from_params(&params(&[("page", raw.as_str())])).resolve(total, 7);
                assert!(page.range_start() <= page.range_end());
                if page.page() == page.total_pages() {
                    assert_eq!(page.range_end(), page.total_items());
                }
            }
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let params = params(&[("search", "ali"), ("page", "2")]);
        let first = PageRequest::from_params(&params).resolve(20, 7);
        let second = PageRequest::from_params(&params).resolve(20, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_carried_through_resolution() {
        let page = PageRequest::from_params(&params(&[("search", "ali")])).resolve(3, 7);
        assert_eq!(page.search(), Some("ali"));
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_zero_page_size_is_floored() {
        let page = PageRequest::from_params(&params(&[])).resolve(5, 0);
        assert_eq!(page.page_size(), 1);
        assert_eq!(page.total_pages(), 5);
    }
}
