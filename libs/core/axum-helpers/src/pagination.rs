use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 0;
    pub const DEFAULT_SIZE: u64 = 10;

    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Largest value a SQL `LIMIT`/`OFFSET` bind accepts (`BIGINT`).
    pub const MAX_BOUND: u64 = i64::MAX as u64;

    /// Rows to skip, saturating at [`Self::MAX_BOUND`].
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(Self::MAX_BOUND)
    }

    /// Rows to take, capped at [`Self::MAX_BOUND`].
    pub fn limit(&self) -> u64 {
        self.size.min(Self::MAX_BOUND)
    }

    /// Slice of an already ordered in-memory collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(items.len());
        let len = usize::try_from(self.size).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_SIZE)
    }
}

/// One page of an ordered collection.
///
/// `total` counts the whole collection, not just `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
