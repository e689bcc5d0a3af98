//! Pagination - Server-Side Page Requests

/// Rows-per-page choices offered by the paginator
pub const ROWS_PER_PAGE_OPTIONS: [u32; 5] = [5, 10, 12, 20, 50];

/// Default rows per page
pub const DEFAULT_ROWS_PER_PAGE: u32 = 12;

/// Largest page size the catalog accepts
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// A request for one page of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub rows_per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_ROWS_PER_PAGE)
    }
}

impl PageRequest {
    /// Create a request; zero values are raised to 1 and the page size is capped
    pub fn new(page: u32, rows_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            rows_per_page: rows_per_page.clamp(1, MAX_ROWS_PER_PAGE),
        }
    }

    /// Index of the first row on this page
    pub fn first_row_index(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.rows_per_page)
    }

    /// Same position in the catalog at a different page size
    ///
    /// The new page is the one containing the current first row.
    pub fn with_rows_per_page(&self, rows_per_page: u32) -> Self {
        let rows_per_page = rows_per_page.clamp(1, MAX_ROWS_PER_PAGE);
        let page = self.first_row_index() / u64::from(rows_per_page) + 1;
        Self::new(u32::try_from(page).unwrap_or(u32::MAX), rows_per_page)
    }

    /// Same page size, different page
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(page, self.rows_per_page)
    }

    /// Keep the page inside `1..=total_pages`
    pub fn clamp(&self, total_pages: u32) -> Self {
        self.with_page(self.page.min(total_pages.max(1)))
    }
}

/// Number of pages needed to show `total_rows`; always at least 1
pub fn total_pages(total_rows: u64, rows_per_page: u32) -> u32 {
    let per_page = u64::from(rows_per_page.max(1));
    let pages = total_rows.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Offered page size closest to `rows_per_page`; ties go to the smaller one
pub fn nearest_rows_per_page_option(rows_per_page: u32) -> u32 {
    ROWS_PER_PAGE_OPTIONS
        .iter()
        .copied()
        .min_by_key(|option| option.abs_diff(rows_per_page))
        .unwrap_or(DEFAULT_ROWS_PER_PAGE)
}

/// Pages that must be read to cover the first `count` rows
pub fn pages_covering(count: u64, rows_per_page: u32) -> impl Iterator<Item = PageRequest> {
    let last = if count == 0 {
        0
    } else {
        total_pages(count, rows_per_page)
    };
    (1..=last).map(move |page| PageRequest::new(page, rows_per_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_index_is_zero_based() {
        assert_eq!(PageRequest::new(1, 12).first_row_index(), 0);
        assert_eq!(PageRequest::new(3, 12).first_row_index(), 24);
    }

    #[test]
    fn new_raises_zero_values() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.rows_per_page, 1);
        assert_eq!(PageRequest::new(1, 500).rows_per_page, MAX_ROWS_PER_PAGE);
    }

    #[test]
    fn resizing_keeps_first_row_visible() {
        // Page 3 at 12 rows starts at row 24, which lives on page 2 at 20 rows.
        let resized = PageRequest::new(3, 12).with_rows_per_page(20);
        assert_eq!(resized, PageRequest::new(2, 20));

        // Shrinking moves forward.
        let resized = PageRequest::new(2, 50).with_rows_per_page(10);
        assert_eq!(resized, PageRequest::new(6, 10));
    }

    #[test]
    fn clamp_limits_page() {
        assert_eq!(PageRequest::new(9, 10).clamp(4).page, 4);
        assert_eq!(PageRequest::new(2, 10).clamp(4).page, 2);
        assert_eq!(PageRequest::new(5, 10).clamp(0).page, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(130_000, 12), 10_834);
    }

    #[test]
    fn snaps_to_nearest_option() {
        assert_eq!(nearest_rows_per_page_option(12), 12);
        assert_eq!(nearest_rows_per_page_option(7), 5);
        assert_eq!(nearest_rows_per_page_option(8), 10);
        assert_eq!(nearest_rows_per_page_option(0), 5);
        assert_eq!(nearest_rows_per_page_option(16), 12);
        assert_eq!(nearest_rows_per_page_option(36), 50);
        assert_eq!(nearest_rows_per_page_option(1000), 50);
    }

    #[test]
    fn pages_covering_count() {
        let pages: Vec<_> = pages_covering(25, 12).map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(pages_covering(0, 12).count(), 0);
    }
}
