//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::domain::pagination::{DEFAULT_ROWS_PER_PAGE, nearest_rows_per_page_option};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog API settings
    pub api: ApiConfig,
    /// Table settings
    pub table: TableConfig,
    /// Local storage settings
    pub storage: StorageConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl AppConfig {
    /// Snap values the UI cannot show onto ones it can
    pub fn normalized(mut self) -> Self {
        let rows_per_page = nearest_rows_per_page_option(self.table.rows_per_page);
        if rows_per_page != self.table.rows_per_page {
            tracing::warn!(
                configured = self.table.rows_per_page,
                using = rows_per_page,
                "rows_per_page is not an offered page size"
            );
            self.table.rows_per_page = rows_per_page;
        }
        self
    }
}

/// Catalog API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g., "https://api.artic.edu/api/v1")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Fields requested from the catalog
    pub fields: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.artic.edu/api/v1".to_string(),
            timeout_secs: 15,
            fields: [
                "id",
                "title",
                "place_of_origin",
                "artist_display",
                "inscriptions",
                "date_start",
                "date_end",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page on startup
    pub rows_per_page: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// Local storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key under which the selection blob is stored
    pub selection_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            selection_key: "selectedArtworks".to_string(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale tag ("en-US" or "zh-CN")
    pub locale: String,
    /// Whether the selection panel starts open
    pub panel_open: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            panel_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:8080/api/v1"

            [table]
            rows_per_page = 20
            "#,
        )
        .expect("parse");

        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.api.fields.len(), 7);
        assert_eq!(config.table.rows_per_page, 20);
        assert_eq!(config.storage.selection_key, "selectedArtworks");
        assert!(config.ui.panel_open);
    }

    #[test]
    fn normalized_snaps_rows_per_page() {
        let mut config = AppConfig::default();
        config.table.rows_per_page = 7;
        assert_eq!(config.normalized().table.rows_per_page, 5);

        let config = AppConfig::default();
        assert_eq!(config.clone().normalized(), config);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, config);
    }
}
