//! Artwork - Catalog Records

use serde::{Deserialize, Serialize};

/// Numeric identifier assigned by the catalog
pub type ArtworkId = u64;

/// A normalized artwork record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog identifier
    pub id: ArtworkId,
    /// Title of the work
    pub title: Option<String>,
    /// Where the work was made
    pub place_of_origin: Option<String>,
    /// Artist line as printed on the label
    pub artist_display: Option<String>,
    /// Inscriptions on the object
    pub inscriptions: Option<String>,
    /// First year of the creation range (negative for BCE)
    pub date_start: Option<i32>,
    /// Last year of the creation range (negative for BCE)
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Create a record with only an id set
    pub fn new(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Title for display, with a placeholder for untitled works
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Creation date range, e.g. `1890 – 1895`, `1890` or `500 BCE – 450 BCE`
    pub fn date_range(&self) -> String {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => format_year(start),
            (Some(start), Some(end)) => format!("{} – {}", format_year(start), format_year(end)),
            (Some(year), None) | (None, Some(year)) => format_year(year),
            (None, None) => String::new(),
        }
    }
}

fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        year.to_string()
    }
}

/// Pagination block reported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// Total number of rows in the catalog
    pub total: u64,
    /// Rows per page used for this response
    pub limit: u32,
    /// Index of the first row of this page
    pub offset: u64,
    /// Number of pages at this limit
    pub total_pages: u32,
    /// 1-based page number
    pub current_page: u32,
}

/// One page of normalized results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtworkPage {
    pub rows: Vec<Artwork>,
    pub info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(start: Option<i32>, end: Option<i32>) -> Artwork {
        Artwork {
            date_start: start,
            date_end: end,
            ..Artwork::new(1)
        }
    }

    #[test]
    fn date_range_formats() {
        assert_eq!(dated(Some(1890), Some(1895)).date_range(), "1890 – 1895");
        assert_eq!(dated(Some(1890), Some(1890)).date_range(), "1890");
        assert_eq!(dated(None, Some(1900)).date_range(), "1900");
        assert_eq!(dated(Some(-500), Some(-450)).date_range(), "500 BCE – 450 BCE");
        assert_eq!(dated(None, None).date_range(), "");
    }

    #[test]
    fn untitled_placeholder() {
        let mut artwork = Artwork::new(7);
        assert_eq!(artwork.display_title(), "Untitled");
        artwork.title = Some("Nighthawks".to_string());
        assert_eq!(artwork.display_title(), "Nighthawks");
    }
}
