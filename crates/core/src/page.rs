//! Pagination over small in-memory lists.
//!
//! The reference screens page through products and audit rows client-side;
//! this keeps the slicing logic in one place.

use serde::Serialize;

/// One page of results plus enough metadata to render a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of matching rows across all pages.
    pub total: usize,
    /// 1-based page number actually served.
    pub page: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }
}

/// Slice `rows` into the requested page.
///
/// Page numbers are 1-based; `page == 0` is treated as 1 and `per_page == 0`
/// is clamped to 1. A page past the end yields an empty item list with the
/// metadata intact.
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> Page<&T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let items = rows.iter().skip(start).take(per_page).collect();
    Page {
        items,
        total: rows.len(),
        page,
        per_page,
    }
}
