//! Page numbering and wire types shared by paged list clients.
//!
//! Backends disagree on whether the first page is `0` or `1`. Everything
//! above this module speaks one-indexed pages; [`PageIndexing`] converts to
//! and from the raw numbers a particular backend expects.

use serde::{Deserialize, Serialize};

/// How a backend numbers its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageIndexing {
    ZeroBased,
    #[default]
    OneBased,
}

impl PageIndexing {
    pub fn from_zero_indexed(zero_indexed: bool) -> Self {
        if zero_indexed {
            Self::ZeroBased
        } else {
            Self::OneBased
        }
    }

    pub fn is_zero_based(self) -> bool {
        self == Self::ZeroBased
    }

    fn offset(self) -> u32 {
        match self {
            Self::ZeroBased => 1,
            Self::OneBased => 0,
        }
    }

    /// Raw number of the first page.
    pub fn first_raw(self) -> u32 {
        self.to_raw(1)
    }

    /// Convert a one-indexed page into the backend's numbering.
    pub fn to_raw(self, one_indexed: u32) -> u32 {
        one_indexed.saturating_sub(self.offset())
    }

    /// Convert a backend page number into a one-indexed page.
    pub fn to_one_indexed(self, raw: u32) -> u32 {
        raw.saturating_add(self.offset())
    }
}

/// Number of pages needed for `count` items at `per_page` items each.
pub fn total_pages(count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Parameters of a single page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number in the backend's own indexing.
    pub page: u32,
    pub page_size: u32,
    /// Additional query parameters, in the order they are sent.
    pub params: Vec<(String, String)>,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All query pairs, starting with `page` and `page_size`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 2);
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("page_size".to_string(), self.page_size.to_string()));
        pairs.extend(self.params.iter().cloned());
        pairs
    }
}

/// Body of a successful page response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub count: u64,
    /// Page number in the backend's own indexing.
    pub current_page: u32,
    pub num_pages: u32,
    /// Offset of the first result within the whole result set.
    pub start: u64,
    pub results: Vec<T>,
}

/// One-indexed summary of where a paged list currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub start: u64,
    pub per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    pub fn new(page: u32, total_pages: u32, total_count: u64, start: u64, per_page: u32) -> Self {
        Self {
            page,
            total_pages,
            total_count,
            start,
            per_page,
            has_next: page.saturating_add(1) <= total_pages,
            has_previous: page >= 2,
        }
    }
}
