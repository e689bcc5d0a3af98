//! Catalog Page
//!
//! The artwork table with its paginator, and the selection side panel.

use std::collections::HashSet;

use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination, TableRow};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::artwork::Artwork;
use crate::domain::pagination::ROWS_PER_PAGE_OPTIONS;
use crate::features::catalog::controller::CatalogController;
use crate::features::catalog::selection_panel::SelectionPanel;
use crate::i18n::{Locale, t};
use crate::theme::colors::Palette;
use crate::utils::format::{single_line, truncate};

impl TableRow for Artwork {
    fn row_key(&self) -> u64 {
        self.id
    }
}

/// Catalog page component
pub struct CatalogPage {
    entities: AppEntities,
    controller: CatalogController,
    table: Entity<DataTable<Artwork>>,
    selection_panel: Entity<SelectionPanel>,
}

impl CatalogPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = CatalogController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let table = cx.new(|cx| {
            let mut table = DataTable::<Artwork>::new(cx);
            table.set_columns(Self::create_columns(locale));
            table.set_messages(t(locale, "table-loading"), t(locale, "table-no-data"));

            let row_controller = controller.clone();
            table.on_toggle_row(move |artwork, checked, _window, cx| {
                row_controller.toggle_row(artwork, checked, cx);
            });
            let page_controller = controller.clone();
            table.on_toggle_all(move |checked, _window, cx| {
                page_controller.toggle_page(checked, cx);
            });
            table
        });

        let selection_panel =
            cx.new(|cx| SelectionPanel::new(entities.clone(), controller.clone(), cx));

        cx.observe(&entities.catalog, |this, _, cx| {
            Self::sync_table(&this.entities, &this.table, cx);
            cx.notify();
        })
        .detach();

        cx.observe(&entities.selection, |this, _, cx| {
            Self::sync_table(&this.entities, &this.table, cx);
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.table.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale));
                table.set_messages(t(locale, "table-loading"), t(locale, "table-no-data"));
                cx.notify();
            });
            Self::sync_table(&this.entities, &this.table, cx);
            cx.notify();
        })
        .detach();

        Self::sync_table(&entities, &table, cx);
        controller.refresh(cx);

        Self {
            entities,
            controller,
            table,
            selection_panel,
        }
    }

    /// Push displayed rows and their checked state into the table
    fn sync_table(entities: &AppEntities, table: &Entity<DataTable<Artwork>>, cx: &mut App) {
        let locale = entities.i18n.read(cx).locale;
        let (rows, loading, error) = {
            let catalog = entities.catalog.read(cx);
            let error = catalog
                .error()
                .map(|e| SharedString::from(format!("{}: {e}", t(locale, "table-error"))));
            (catalog.rows().to_vec(), catalog.is_loading(), error)
        };
        let (checked, header_state) = {
            let selection = entities.selection.read(cx);
            let checked: HashSet<u64> = selection
                .map()
                .checked_rows(&rows)
                .into_iter()
                .map(|artwork| artwork.id)
                .collect();
            (checked, selection.page_check_state(&rows))
        };

        table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_checked(checked, header_state);
            table.set_loading(loading);
            table.set_error(error);
            cx.notify();
        });
    }

    fn create_columns(locale: Locale) -> Vec<Column<Artwork>> {
        vec![
            Column::new("title", t(locale, "col-title"), |row: &Artwork| {
                div()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(truncate(row.display_title(), 80))
                    .into_any_element()
            })
            .flex_width(220.0),
            Column::new("place_of_origin", t(locale, "col-place-of-origin"), |row: &Artwork| {
                text_cell(row.place_of_origin.as_deref())
            })
            .fixed_width(140.0),
            Column::new("artist", t(locale, "col-artist"), |row: &Artwork| {
                text_cell(
                    row.artist_display
                        .as_deref()
                        .map(|artist| truncate(&single_line(artist), 90))
                        .as_deref(),
                )
            })
            .flex_width(200.0),
            Column::new("inscriptions", t(locale, "col-inscriptions"), |row: &Artwork| {
                text_cell(
                    row.inscriptions
                        .as_deref()
                        .map(|text| truncate(&single_line(text), 60))
                        .as_deref(),
                )
            })
            .flex_width(160.0),
            Column::new("date_start", t(locale, "col-date-start"), |row: &Artwork| {
                year_cell(row.date_start)
            })
            .fixed_width(90.0),
            Column::new("date_end", t(locale, "col-date-end"), |row: &Artwork| {
                year_cell(row.date_end)
            })
            .fixed_width(90.0),
        ]
    }
}

fn text_cell(text: Option<&str>) -> gpui::AnyElement {
    match text {
        Some(text) => div().child(text.to_string()).into_any_element(),
        None => div()
            .text_color(Palette::text_muted())
            .child("—")
            .into_any_element(),
    }
}

fn year_cell(year: Option<i32>) -> gpui::AnyElement {
    text_cell(year.map(|y| y.to_string()).as_deref())
}

impl Render for CatalogPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let panel_open = self.entities.selection.read(cx).panel_open;
        let catalog = self.entities.catalog.read(cx);
        let request = catalog.request();
        let loading = catalog.is_loading();

        let page_controller = self.controller.clone();
        let rows_controller = self.controller.clone();
        let pagination = Pagination::new(request.page, catalog.total_pages(), catalog.total_rows())
            .items_label(t(locale, "page-items"))
            .rows_per_page(
                request.rows_per_page,
                &ROWS_PER_PAGE_OPTIONS,
                t(locale, "page-rows-per-page"),
            )
            .disabled(loading)
            .on_page_change(move |page, _window, cx| page_controller.change_page(page, cx))
            .on_rows_change(move |rows, _window, cx| {
                rows_controller.change_rows_per_page(rows, cx)
            });

        let refresh_controller = self.controller.clone();

        div()
            .size_full()
            .flex()
            .flex_row()
            .overflow_hidden()
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .p_4()
                    .gap_2()
                    .overflow_hidden()
                    .child(
                        div().flex().justify_end().child(
                            Button::secondary("refresh-catalog", t(locale, "action-refresh"))
                                .size(ButtonSize::Small)
                                .disabled(loading)
                                .on_click(move |_event, _window, cx| refresh_controller.refresh(cx)),
                        ),
                    )
                    .child(div().flex_1().overflow_hidden().child(self.table.clone()))
                    .child(pagination),
            )
            .children(panel_open.then(|| self.selection_panel.clone()))
    }
}
