// src/domain/pagination.rs
//! Offset pagination primitives.
//!
//! Requests past the last page are valid and simply produce an empty slice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Page numbers below 1 are clamped to 1, as is a zero page size.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Lenient parsing of a `?page=` value: anything that is not a positive
    /// integer means the first page.
    pub fn from_param(raw: Option<&str>, per_page: u32) -> Self {
        let page = raw
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page, per_page)
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// One page of results together with the size of the whole result set.
#[derive(Debug, Clone)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> PageSlice<T> {
    pub const fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Never below 1, even for an empty result set.
    pub fn last_page(&self) -> u32 {
        let pages = self.total.div_ceil(self.request.limit()).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
