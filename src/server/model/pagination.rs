//! Page requests and results shared by every paginated listing.

use crate::model::api::PaginatedDto;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Creates a page request, clamping `page` and `limit` to at least 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// One page of domain models together with the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            total_pages: request.total_pages(total),
        }
    }

    /// Converts the page to a DTO, mapping each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}
