//! List query parameters and the paginated response envelope.
//!
//! List endpoints are not uniform: newer ones answer with
//! `{ data, meta: { totalPages, totalItems } }`, older ones with
//! `{ data, pagination: { total_pages, total_items } }`. Both are accepted
//! by [`ListEnvelope`] and normalised into [`Paginated`] so nothing past the
//! HTTP adapter ever sees the difference.

use serde::{Deserialize, Serialize};

/// Status filter exactly as the UI select produces it.
///
/// Codes are passed to the backend untouched; the client never filters rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Code(String),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Code(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Code(code) => code,
        }
    }
}

/// One page request. `page` is 1-based on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub status: StatusFilter,
    pub search: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams<'a> {
    page: u32,
    page_size: u32,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        let search = self.search.trim();
        let params = QueryParams {
            page: self.page,
            page_size: self.page_size,
            size: self.page_size,
            status: match &self.status {
                StatusFilter::All => None,
                StatusFilter::Code(code) => Some(code.as_str()),
            },
            search: (!search.is_empty()).then_some(search),
        };
        serde_qs::to_string(&params).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: u32,
    pub total_items: u64,
}

/// Normalised page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Each spelling is its own field so a response carrying several of them
/// still parses; the first present one wins.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawMeta {
    #[serde(default, rename = "totalPages")]
    total_pages_camel: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default, rename = "totalItems")]
    total_items_camel: Option<u64>,
    #[serde(default)]
    total_items: Option<u64>,
    #[serde(default)]
    total: Option<u64>,
}

impl RawMeta {
    fn pages(&self) -> Option<u32> {
        self.total_pages_camel.or(self.total_pages)
    }

    fn items(&self) -> Option<u64> {
        self.total_items_camel.or(self.total_items).or(self.total)
    }
}

/// Raw list response, either key-naming convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    data: Option<Vec<T>>,
    #[serde(default)]
    items: Option<Vec<T>>,
    #[serde(default)]
    meta: Option<RawMeta>,
    #[serde(default)]
    pagination: Option<RawMeta>,
}

impl<T> ListEnvelope<T> {
    pub fn into_paginated(self) -> Paginated<T> {
        let data = self.data.or(self.items).unwrap_or_default();
        let raw = self.meta.or(self.pagination).unwrap_or_default();
        let total_items = raw.items().unwrap_or(data.len() as u64);
        let total_pages = raw.pages().unwrap_or(1).max(1);
        Paginated {
            data,
            meta: PageMeta {
                total_pages,
                total_items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_meta() {
        let env: ListEnvelope<String> = serde_json::from_value(json!({
            "data": ["bankA", "bankB"],
            "meta": { "totalPages": 3, "totalItems": 120 }
        }))
        .unwrap();
        let page = env.into_paginated();
        assert_eq!(page.data.len(), 2);
        assert_eq!(
            page.meta,
            PageMeta {
                total_pages: 3,
                total_items: 120
            }
        );
    }

    #[test]
    fn snake_case_pagination_block() {
        let env: ListEnvelope<u32> = serde_json::from_value(json!({
            "data": [1, 2, 3],
            "pagination": { "total_pages": 7, "total_items": 61 }
        }))
        .unwrap();
        let page = env.into_paginated();
        assert_eq!(page.meta.total_pages, 7);
        assert_eq!(page.meta.total_items, 61);
    }

    #[test]
    fn missing_meta_falls_back_to_single_page() {
        let env: ListEnvelope<u32> = serde_json::from_value(json!({ "items": [1, 2] })).unwrap();
        let page = env.into_paginated();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.total_items, 2);
    }

    #[test]
    fn tolerates_several_spellings_at_once() {
        let env: ListEnvelope<u32> = serde_json::from_value(json!({
            "data": [1],
            "items": [9, 9],
            "meta": { "totalPages": 4, "total_pages": 4, "totalItems": 31, "total": 31 }
        }))
        .unwrap();
        let page = env.into_paginated();
        assert_eq!(page.data, vec![1]);
        assert_eq!(page.meta.total_pages, 4);
        assert_eq!(page.meta.total_items, 31);
    }

    #[test]
    fn bare_total_counts_items() {
        let env: ListEnvelope<u32> = serde_json::from_value(json!({
            "data": [1, 2],
            "pagination": { "total_pages": 2, "total": 12 }
        }))
        .unwrap();
        assert_eq!(env.into_paginated().meta.total_items, 12);
    }

    #[test]
    fn zero_pages_is_clamped() {
        let env: ListEnvelope<u32> = serde_json::from_value(json!({
            "data": [],
            "meta": { "totalPages": 0, "totalItems": 0 }
        }))
        .unwrap();
        assert_eq!(env.into_paginated().meta.total_pages, 1);
    }

    #[test]
    fn query_string_omits_all_and_blank_search() {
        let q = ListQuery {
            page: 1,
            page_size: 50,
            status: StatusFilter::All,
            search: "  ".to_string(),
        };
        assert_eq!(q.to_query_string(), "page=1&pageSize=50&size=50");
    }

    #[test]
    fn query_string_passes_status_code_through() {
        let q = ListQuery {
            page: 2,
            page_size: 10,
            status: StatusFilter::parse("0"),
            search: "deep clean".to_string(),
        };
        let qs = q.to_query_string();
        assert!(qs.contains("status=0"));
        assert!(qs.contains("page=2"));
        assert!(qs.contains("search=deep"));
    }

    #[test]
    fn status_filter_parse() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
        assert_eq!(StatusFilter::parse("2").as_str(), "2");
    }
}
