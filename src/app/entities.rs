//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the catalog changes on every page
//! load, the selection on user clicks, the logs continuously.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::state::{
    catalog_state::CatalogState, i18n_state::I18nState, log_state::LogState,
    selection_state::SelectionState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Requested page and displayed rows
    pub catalog: Entity<CatalogState>,
    /// Cross-page selection and side panel visibility
    pub selection: Entity<SelectionState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the config and the stored selection blob
    pub fn init(config: &AppConfig, stored_selection: Option<&str>, cx: &mut App) -> Self {
        Self {
            catalog: cx.new(|_| CatalogState::new(config.table.rows_per_page)),
            selection: cx.new(|_| SelectionState::restore(stored_selection, config.ui.panel_open)),
            logs: cx.new(|_| LogState::default()),
            i18n: cx.new(|_| I18nState::from_tag(&config.ui.locale)),
        }
    }
}
