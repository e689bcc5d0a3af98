//! CatalogState - Pagination and Displayed Rows
//!
//! Every fetch is tagged with a sequence number from [`CatalogState::begin_fetch`].
//! Only the response carrying the latest number is applied, so a slow
//! response for a page the user already left never overwrites the table.

use crate::domain::artwork::{Artwork, ArtworkPage, PageInfo};
use crate::domain::pagination::{PageRequest, total_pages};

/// State for the catalog table
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Page currently requested
    request: PageRequest,
    /// Request whose page is on screen
    shown: PageRequest,
    /// Rows of the last applied page
    rows: Vec<Artwork>,
    /// Pagination block of the last applied page
    info: PageInfo,
    /// Whether a fetch is in flight
    loading: bool,
    /// Error from the last failed fetch
    error: Option<String>,
    /// Sequence number of the latest fetch
    latest_seq: u64,
}

impl CatalogState {
    /// Create a state positioned on the first page
    pub fn new(rows_per_page: u32) -> Self {
        let request = PageRequest::new(1, rows_per_page);
        Self {
            request,
            shown: request,
            ..Self::default()
        }
    }

    // ==================== Getters ====================

    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Request of the page whose rows are displayed
    pub fn shown_request(&self) -> PageRequest {
        self.shown
    }

    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    pub fn info(&self) -> PageInfo {
        self.info
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Total rows reported by the catalog
    pub fn total_rows(&self) -> u64 {
        self.info.total
    }

    /// Pages available at the current page size
    pub fn total_pages(&self) -> u32 {
        total_pages(self.info.total, self.request.rows_per_page)
    }

    // ==================== Fetch lifecycle ====================

    /// Record a new request and return its sequence number
    pub fn begin_fetch(&mut self, request: PageRequest) -> u64 {
        self.latest_seq += 1;
        self.request = request;
        self.loading = true;
        self.error = None;
        self.latest_seq
    }

    /// Whether `seq` belongs to the latest fetch
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Apply a fetched page; stale responses are ignored
    pub fn apply_page(&mut self, seq: u64, page: ArtworkPage) -> bool {
        if !self.is_current(seq) {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale catalog page");
            return false;
        }
        self.shown = self.request;
        self.rows = page.rows;
        self.info = page.info;
        self.loading = false;
        self.error = None;
        true
    }

    /// Apply a failed fetch; stale failures are ignored
    ///
    /// The previously displayed rows stay on screen and the request falls
    /// back to theirs, so asking for the failed page again issues a new fetch.
    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if !self.is_current(seq) {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale catalog error");
            return false;
        }
        self.request = self.shown;
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Request to issue when the current page lies past the last page
    ///
    /// Happens when the catalog shrank or the page size grew.
    pub fn out_of_range_fix(&self) -> Option<PageRequest> {
        if self.loading || self.info.total == 0 {
            return None;
        }
        let clamped = self.request.clamp(self.total_pages());
        (clamped != self.request).then_some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[u64], total: u64, request: PageRequest) -> ArtworkPage {
        ArtworkPage {
            rows: ids.iter().map(|id| Artwork::new(*id)).collect(),
            info: PageInfo {
                total,
                limit: request.rows_per_page,
                offset: request.first_row_index(),
                total_pages: total_pages(total, request.rows_per_page),
                current_page: request.page,
            },
        }
    }

    #[test]
    fn applies_latest_page() {
        let mut state = CatalogState::new(2);
        let request = PageRequest::new(1, 2);
        let seq = state.begin_fetch(request);
        assert!(state.is_loading());

        assert!(state.apply_page(seq, page(&[1, 2], 10, request)));
        assert!(!state.is_loading());
        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = CatalogState::new(2);
        let first = state.begin_fetch(PageRequest::new(1, 2));
        let second = state.begin_fetch(PageRequest::new(2, 2));

        // Page 1 answers after the user already moved to page 2.
        assert!(!state.apply_page(first, page(&[1, 2], 10, PageRequest::new(1, 2))));
        assert!(state.is_loading());
        assert!(state.rows().is_empty());

        assert!(state.apply_page(second, page(&[3, 4], 10, PageRequest::new(2, 2))));
        let ids: Vec<_> = state.rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(state.request().page, 2);
    }

    #[test]
    fn error_keeps_previous_rows() {
        let mut state = CatalogState::new(2);
        let seq = state.begin_fetch(PageRequest::new(1, 2));
        state.apply_page(seq, page(&[1, 2], 10, PageRequest::new(1, 2)));

        let stale = state.begin_fetch(PageRequest::new(2, 2));
        let seq = state.begin_fetch(PageRequest::new(3, 2));
        assert!(!state.apply_error(stale, "old".to_string()));
        assert!(state.apply_error(seq, "timeout".to_string()));

        assert_eq!(state.error(), Some("timeout"));
        assert_eq!(state.rows().len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_page_falls_back_to_shown_request() {
        let mut state = CatalogState::new(2);
        let first = PageRequest::new(1, 2);
        let seq = state.begin_fetch(first);
        state.apply_page(seq, page(&[1, 2], 10, first));

        let second = PageRequest::new(2, 2);
        let seq = state.begin_fetch(second);
        assert_eq!(state.request(), second);
        assert_eq!(state.shown_request(), first);
        assert!(state.apply_error(seq, "HTTP 429".to_string()));

        // The paginator matches the rows still on screen.
        assert_eq!(state.request(), first);
        let ids: Vec<_> = state.rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // Asking for page 2 again is a real change and goes out as a new fetch.
        assert_ne!(state.request().with_page(2), state.request());
        let retry = state.begin_fetch(second);
        assert!(state.apply_page(retry, page(&[3, 4], 10, second)));
        assert_eq!(state.request(), second);
        assert_eq!(state.shown_request(), second);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failed_page_size_change_restores_previous_size() {
        let mut state = CatalogState::new(10);
        let first = PageRequest::new(1, 10);
        let seq = state.begin_fetch(first);
        state.apply_page(seq, page(&[1, 2, 3], 30, first));

        let seq = state.begin_fetch(first.with_rows_per_page(20));
        state.apply_error(seq, "timeout".to_string());

        assert_eq!(state.request().rows_per_page, 10);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let mut state = CatalogState::new(10);
        let request = PageRequest::new(9, 10);
        let seq = state.begin_fetch(request);
        assert_eq!(state.out_of_range_fix(), None);

        state.apply_page(seq, page(&[], 25, request));
        assert_eq!(state.out_of_range_fix(), Some(PageRequest::new(3, 10)));
    }
}
