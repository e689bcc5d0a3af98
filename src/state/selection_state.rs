//! SelectionState - Cross-Page Selection and Side Panel

use crate::domain::artwork::{Artwork, ArtworkId};
use crate::domain::selection::{PageCheckState, SelectionMap};
use crate::error::Result;

/// State for the user's selection
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selected artworks across all pages
    map: SelectionMap,
    /// Whether the side panel is shown
    pub panel_open: bool,
    /// Whether a bulk selection is being fetched
    bulk_loading: bool,
}

impl SelectionState {
    /// Restore the selection from a persisted blob
    pub fn restore(blob: Option<&str>, panel_open: bool) -> Self {
        Self {
            map: SelectionMap::from_blob_or_empty(blob),
            panel_open,
            bulk_loading: false,
        }
    }

    pub fn map(&self) -> &SelectionMap {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.map.contains(id)
    }

    pub fn page_check_state(&self, displayed: &[Artwork]) -> PageCheckState {
        self.map.page_check_state(displayed)
    }

    pub fn is_bulk_loading(&self) -> bool {
        self.bulk_loading
    }

    pub fn set_bulk_loading(&mut self, loading: bool) {
        self.bulk_loading = loading;
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    // ==================== Mutations ====================
    //
    // Each returns whether the map changed, so callers only persist
    // when there is something new to write.

    pub fn toggle_row(&mut self, artwork: &Artwork, checked: bool) -> bool {
        self.map.toggle(artwork, checked)
    }

    /// Header checkbox: select or clear every displayed row
    pub fn toggle_page(&mut self, displayed: &[Artwork], checked: bool) -> bool {
        let changed = if checked {
            self.map.select_rows(displayed)
        } else {
            self.map.deselect_rows(displayed)
        };
        changed > 0
    }

    /// Add rows from a bulk selection
    pub fn add_rows(&mut self, rows: &[Artwork]) -> usize {
        self.map.select_rows(rows)
    }

    /// Refresh stored records from freshly displayed rows
    pub fn refresh_from(&mut self, displayed: &[Artwork]) -> bool {
        self.map.refresh_from(displayed)
    }

    pub fn remove(&mut self, id: ArtworkId) -> bool {
        self.map.remove(id).is_some()
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.map.is_empty();
        self.map.clear();
        changed
    }

    /// Blob to persist; `None` when nothing is selected
    pub fn persisted_blob(&self) -> Result<Option<String>> {
        if self.map.is_empty() {
            Ok(None)
        } else {
            self.map.to_blob().map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[ArtworkId]) -> Vec<Artwork> {
        ids.iter().map(|id| Artwork::new(*id)).collect()
    }

    #[test]
    fn restore_and_persist_round_trip() {
        let mut state = SelectionState::restore(None, true);
        assert!(state.is_empty());
        assert_eq!(state.persisted_blob().expect("blob"), None);

        state.toggle_page(&rows(&[1, 2, 3]), true);
        let blob = state.persisted_blob().expect("blob").expect("non-empty");

        let restored = SelectionState::restore(Some(blob.as_str()), false);
        assert_eq!(restored.len(), 3);
        assert!(restored.is_selected(2));
        assert!(!restored.panel_open);
    }

    #[test]
    fn toggle_page_reports_changes() {
        let mut state = SelectionState::default();
        let page = rows(&[1, 2]);

        assert!(state.toggle_page(&page, true));
        assert!(!state.toggle_page(&page, true));
        assert!(state.toggle_page(&page, false));
        assert!(!state.toggle_page(&page, false));
    }

    #[test]
    fn clear_and_remove() {
        let mut state = SelectionState::default();
        state.add_rows(&rows(&[1, 2]));

        assert!(state.remove(1));
        assert!(!state.remove(1));
        assert!(state.clear());
        assert!(!state.clear());
    }
}
