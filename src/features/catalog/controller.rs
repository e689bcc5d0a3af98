//! Catalog Controller
//!
//! Turns user actions into state changes and service requests. Every change
//! to the selection map is persisted through the service hub.

use gpui::App;
use tracing::{debug, error, info, warn};

use crate::app::entities::AppEntities;
use crate::domain::artwork::{Artwork, ArtworkId, ArtworkPage};
use crate::domain::pagination::{MAX_ROWS_PER_PAGE, PageRequest};
use crate::services::catalog_client::LeadingRows;
use crate::services::runtime::run_in_tokio;
use crate::services::service_hub::ServiceHub;
use crate::state::selection_state::SelectionState;

/// Catalog page controller
#[derive(Clone)]
pub struct CatalogController {
    entities: AppEntities,
}

impl CatalogController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    // ==================== Pagination ====================

    /// Fetch `request`, superseding any fetch still in flight
    pub fn load_page(&self, request: PageRequest, cx: &mut App) {
        let seq = self.entities.catalog.update(cx, |catalog, cx| {
            let seq = catalog.begin_fetch(request);
            cx.notify();
            seq
        });

        match cx.try_global::<ServiceHub>() {
            Some(hub) => hub.fetch_page(seq, request),
            None => warn!("Service hub not available, page not fetched"),
        }
    }

    /// Go to `page` at the current page size
    pub fn change_page(&self, page: u32, cx: &mut App) {
        let current = self.entities.catalog.read(cx).request();
        let request = current.with_page(page);
        if request == current {
            return;
        }
        debug!(from = current.page, to = request.page, "Changing page");
        self.load_page(request, cx);
    }

    /// Switch the page size, keeping the first visible row on screen
    pub fn change_rows_per_page(&self, rows_per_page: u32, cx: &mut App) {
        let current = self.entities.catalog.read(cx).request();
        let request = current.with_rows_per_page(rows_per_page);
        if request == current {
            return;
        }
        debug!(rows_per_page = request.rows_per_page, page = request.page, "Changing page size");
        self.load_page(request, cx);
    }

    /// Reload the current page
    pub fn refresh(&self, cx: &mut App) {
        let request = self.entities.catalog.read(cx).request();
        self.load_page(request, cx);
    }

    /// Apply a page delivered by the service hub
    pub fn on_page_loaded(&self, seq: u64, page: ArtworkPage, cx: &mut App) {
        let applied = self.entities.catalog.update(cx, |catalog, cx| {
            let applied = catalog.apply_page(seq, page);
            if applied {
                cx.notify();
            }
            applied
        });
        if !applied {
            return;
        }

        let rows = self.entities.catalog.read(cx).rows().to_vec();
        self.update_selection(cx, |selection| selection.refresh_from(&rows));

        if let Some(request) = self.entities.catalog.read(cx).out_of_range_fix() {
            info!(page = request.page, "Current page is past the end, moving to the last page");
            self.load_page(request, cx);
        }
    }

    /// Apply a failure delivered by the service hub
    pub fn on_page_failed(&self, seq: u64, message: String, cx: &mut App) {
        self.entities.catalog.update(cx, |catalog, cx| {
            if catalog.apply_error(seq, message) {
                cx.notify();
            }
        });
    }

    // ==================== Selection ====================

    /// Check or uncheck one row
    pub fn toggle_row(&self, artwork: &Artwork, checked: bool, cx: &mut App) {
        self.update_selection(cx, |selection| selection.toggle_row(artwork, checked));
    }

    /// Header checkbox: check or uncheck every displayed row
    pub fn toggle_page(&self, checked: bool, cx: &mut App) {
        let rows = self.entities.catalog.read(cx).rows().to_vec();
        self.update_selection(cx, |selection| selection.toggle_page(&rows, checked));
    }

    /// Remove one artwork from the side panel
    pub fn remove_selected(&self, id: ArtworkId, cx: &mut App) {
        self.update_selection(cx, |selection| selection.remove(id));
    }

    /// Empty the selection
    pub fn clear_selection(&self, cx: &mut App) {
        if self.update_selection(cx, SelectionState::clear) {
            info!("Selection cleared");
        }
    }

    /// Add the first `count` catalog rows to the selection
    ///
    /// Rows are fetched in the background at the largest page size, so the
    /// number of requests does not depend on the table's page size.
    pub fn bulk_select(&self, count: u64, cx: &mut App) {
        if self.entities.selection.read(cx).is_bulk_loading() {
            debug!("Bulk selection already running");
            return;
        }

        let total = self.entities.catalog.read(cx).total_rows();
        let count = count.min(total);
        if count == 0 {
            warn!(total, "Nothing to select");
            return;
        }

        let Some(client) = cx.try_global::<ServiceHub>().map(ServiceHub::client) else {
            warn!("Service hub not available, bulk selection skipped");
            return;
        };

        self.entities.selection.update(cx, |selection, cx| {
            selection.set_bulk_loading(true);
            cx.notify();
        });
        info!(count, "Selecting leading rows");

        let controller = self.clone();
        cx.spawn(async move |cx| {
            let leading = run_in_tokio(async move {
                client.fetch_leading_rows(count, MAX_ROWS_PER_PAGE).await
            })
            .await;
            let _ = cx.update(|cx: &mut App| controller.finish_bulk_select(count, leading, cx));
        })
        .detach();
    }

    /// Add whatever was fetched, even when a later page failed
    fn finish_bulk_select(&self, requested: u64, leading: LeadingRows, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.set_bulk_loading(false);
            cx.notify();
        });

        let LeadingRows { rows, error } = leading;
        let mut added = 0;
        self.update_selection(cx, |selection| {
            added = selection.add_rows(&rows);
            added > 0
        });

        match error {
            None => info!(requested, fetched = rows.len(), added, "Bulk selection finished"),
            Some(e) if rows.is_empty() => error!(requested, error = %e, "Bulk selection failed"),
            Some(e) => warn!(
                requested,
                fetched = rows.len(),
                added,
                error = %e,
                "Bulk selection stopped early, kept the rows fetched so far"
            ),
        }
    }

    /// Run a selection mutation and persist the map when it changed
    fn update_selection(
        &self,
        cx: &mut App,
        mutate: impl FnOnce(&mut SelectionState) -> bool,
    ) -> bool {
        let changed = self.entities.selection.update(cx, |selection, cx| {
            let changed = mutate(selection);
            if changed {
                cx.notify();
            }
            changed
        });
        if changed {
            self.persist_selection(cx);
        }
        changed
    }

    fn persist_selection(&self, cx: &mut App) {
        let blob = match self.entities.selection.read(cx).persisted_blob() {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, "Failed to serialize selection");
                return;
            }
        };
        match cx.try_global::<ServiceHub>() {
            Some(hub) => hub.persist_selection(blob),
            None => warn!("Service hub not available, selection not persisted"),
        }
    }
}
