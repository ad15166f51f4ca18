use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page cursor over a result set of known size.
///
/// `current_page` is 1-indexed and kept within `[1, total_pages(count)]` by
/// every mutator. Out-of-range requests are clamped, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// A page size of zero is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        // Deserialized state may carry a zero size.
        self.page_size.max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `max(1, ceil(count / page_size))`
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size()).max(1)
    }

    /// Pull the cursor back inside the range for `count` results.
    pub fn clamp(&mut self, count: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(count));
    }

    /// Jump to `page`, clamped. Accepts non-positive requests.
    pub fn go_to(&mut self, page: i64, count: usize) {
        let last = self.total_pages(count);
        self.current_page = if page < 1 {
            1
        } else {
            usize::try_from(page).map_or(last, |p| p.min(last))
        };
    }

    pub fn next(&mut self, count: usize) {
        self.current_page = (self.current_page + 1).min(self.total_pages(count));
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Half-open index range of the current page within `count` results.
    ///
    /// Callers clamp first; an unclamped cursor past the end yields an empty
    /// range rather than panicking.
    pub fn range(&self, count: usize) -> Range<usize> {
        let size = self.page_size();
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(size)
            .min(count);
        let end = start.saturating_add(size).min(count);
        start..end
    }
}
