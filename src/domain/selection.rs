//! Selection - Cross-Page Selection Map
//!
//! The selection map holds every artwork the user has checked, on any page.
//! Page changes never touch it; the checked rows of the current page are
//! derived by intersecting the displayed rows with the map.

use hashlink::LinkedHashMap;

use crate::domain::artwork::{Artwork, ArtworkId};
use crate::error::Result;

/// Check state of the header checkbox for the displayed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCheckState {
    /// No displayed row is selected (or the page is empty)
    None,
    /// Some but not all displayed rows are selected
    Partial,
    /// Every displayed row is selected
    All,
}

/// Artwork id -> artwork record, kept in the order rows were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    items: LinkedHashMap<ArtworkId, Artwork>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected artworks
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.items.get(&id)
    }

    /// Selected artworks in pick order
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.values()
    }

    /// Insert or refresh a record without changing its position
    fn upsert(&mut self, artwork: &Artwork) -> bool {
        if let Some(existing) = self.items.get_mut(&artwork.id) {
            *existing = artwork.clone();
            false
        } else {
            self.items.insert(artwork.id, artwork.clone());
            true
        }
    }

    /// Set one row's membership; returns whether the map changed
    pub fn toggle(&mut self, artwork: &Artwork, checked: bool) -> bool {
        if checked {
            self.upsert(artwork)
        } else {
            self.items.remove(&artwork.id).is_some()
        }
    }

    /// Add every row; returns how many were new
    pub fn select_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a Artwork>) -> usize {
        rows.into_iter().filter(|row| self.upsert(row)).count()
    }

    /// Remove every row; returns how many were removed
    pub fn deselect_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a Artwork>) -> usize {
        rows.into_iter()
            .filter(|row| self.items.remove(&row.id).is_some())
            .count()
    }

    /// Remove one artwork by id
    pub fn remove(&mut self, id: ArtworkId) -> Option<Artwork> {
        self.items.remove(&id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Displayed rows that are part of the selection
    pub fn checked_rows<'a>(&self, displayed: &'a [Artwork]) -> Vec<&'a Artwork> {
        displayed.iter().filter(|row| self.contains(row.id)).collect()
    }

    /// Replace stored records with freshly fetched versions of the same ids
    ///
    /// Returns whether any stored record changed.
    pub fn refresh_from(&mut self, displayed: &[Artwork]) -> bool {
        let mut changed = false;
        for row in displayed {
            if let Some(existing) = self.items.get_mut(&row.id) {
                if existing != row {
                    *existing = row.clone();
                    changed = true;
                }
            }
        }
        changed
    }

    /// Header checkbox state for the displayed rows
    pub fn page_check_state(&self, displayed: &[Artwork]) -> PageCheckState {
        let checked = displayed.iter().filter(|row| self.contains(row.id)).count();
        if checked == 0 {
            PageCheckState::None
        } else if checked == displayed.len() {
            PageCheckState::All
        } else {
            PageCheckState::Partial
        }
    }

    /// Serialize to the persisted blob: a JSON object keyed by id
    pub fn to_blob(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Parse a persisted blob
    ///
    /// Entries whose key disagrees with the record id are dropped.
    pub fn from_blob(blob: &str) -> Result<Self> {
        let parsed: LinkedHashMap<ArtworkId, Artwork> = serde_json::from_str(blob)?;
        let items = parsed
            .into_iter()
            .filter(|(id, artwork)| {
                let consistent = *id == artwork.id;
                if !consistent {
                    tracing::warn!(key = id, record = artwork.id, "Dropping inconsistent selection entry");
                }
                consistent
            })
            .collect();
        Ok(Self { items })
    }

    /// Parse a persisted blob, falling back to an empty selection
    pub fn from_blob_or_empty(blob: Option<&str>) -> Self {
        let Some(blob) = blob else {
            return Self::new();
        };
        match Self::from_blob(blob) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable selection blob");
                Self::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: ArtworkId, title: &str) -> Artwork {
        Artwork {
            title: Some(title.to_string()),
            ..Artwork::new(id)
        }
    }

    fn page(ids: &[ArtworkId]) -> Vec<Artwork> {
        ids.iter().map(|id| artwork(*id, &format!("Work {id}"))).collect()
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut map = SelectionMap::new();
        let a = artwork(1, "A");

        assert!(map.toggle(&a, true));
        assert!(!map.toggle(&a, true));
        assert_eq!(map.len(), 1);

        assert!(map.toggle(&a, false));
        assert!(!map.toggle(&a, false));
        assert!(map.is_empty());
    }

    #[test]
    fn selection_survives_page_changes() {
        let mut map = SelectionMap::new();
        let page_one = page(&[1, 2, 3]);
        let page_two = page(&[4, 5, 6]);

        map.toggle(&page_one[1], true);
        map.toggle(&page_two[0], true);

        let checked: Vec<_> = map.checked_rows(&page_one).iter().map(|a| a.id).collect();
        assert_eq!(checked, vec![2]);
        let checked: Vec<_> = map.checked_rows(&page_two).iter().map(|a| a.id).collect();
        assert_eq!(checked, vec![4]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn page_check_state_tracks_header() {
        let mut map = SelectionMap::new();
        let rows = page(&[1, 2]);

        assert_eq!(map.page_check_state(&rows), PageCheckState::None);
        map.toggle(&rows[0], true);
        assert_eq!(map.page_check_state(&rows), PageCheckState::Partial);
        map.toggle(&rows[1], true);
        assert_eq!(map.page_check_state(&rows), PageCheckState::All);
        assert_eq!(map.page_check_state(&[]), PageCheckState::None);
    }

    #[test]
    fn select_and_deselect_page_leave_other_pages_alone() {
        let mut map = SelectionMap::new();
        let other = artwork(99, "Elsewhere");
        map.toggle(&other, true);

        let rows = page(&[1, 2, 3]);
        assert_eq!(map.select_rows(&rows), 3);
        assert_eq!(map.select_rows(&rows), 0);
        assert_eq!(map.len(), 4);

        assert_eq!(map.deselect_rows(&rows), 3);
        assert_eq!(map.len(), 1);
        assert!(map.contains(99));
    }

    #[test]
    fn keeps_pick_order() {
        let mut map = SelectionMap::new();
        for id in [5, 1, 3] {
            map.toggle(&artwork(id, "x"), true);
        }
        // Refreshing an existing entry keeps its slot.
        map.toggle(&artwork(1, "renamed"), true);

        let ids: Vec<_> = map.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
        assert_eq!(map.get(1).and_then(|a| a.title.as_deref()), Some("renamed"));
    }

    #[test]
    fn refresh_from_updates_stale_records() {
        let mut map = SelectionMap::new();
        map.toggle(&artwork(1, "old"), true);

        assert!(map.refresh_from(&[artwork(1, "new"), artwork(2, "unselected")]));
        assert_eq!(map.get(1).and_then(|a| a.title.as_deref()), Some("new"));
        assert!(!map.contains(2));
        assert!(!map.refresh_from(&[artwork(1, "new")]));
    }

    #[test]
    fn blob_round_trip_preserves_order() {
        let mut map = SelectionMap::new();
        map.toggle(&artwork(20, "B"), true);
        map.toggle(&artwork(3, "A"), true);

        let blob = map.to_blob().expect("serialize");
        assert!(blob.starts_with("{\"20\":"));

        let restored = SelectionMap::from_blob(&blob).expect("parse");
        assert_eq!(restored, map);
    }

    #[test]
    fn blob_drops_inconsistent_entries() {
        let blob = r#"{
            "1": {"id": 1, "title": "ok", "place_of_origin": null, "artist_display": null,
                  "inscriptions": null, "date_start": null, "date_end": null},
            "2": {"id": 3, "title": "wrong key", "place_of_origin": null, "artist_display": null,
                  "inscriptions": null, "date_start": null, "date_end": null}
        }"#;
        let map = SelectionMap::from_blob(blob).expect("parse");
        assert_eq!(map.len(), 1);
        assert!(map.contains(1));
    }

    #[test]
    fn malformed_blob_falls_back_to_empty() {
        assert!(SelectionMap::from_blob("not json").is_err());
        assert!(SelectionMap::from_blob_or_empty(Some("not json")).is_empty());
        assert!(SelectionMap::from_blob_or_empty(None).is_empty());
    }
}
