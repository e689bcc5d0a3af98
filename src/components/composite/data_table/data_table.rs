//! DataTable Component
//!
//! Renders rows with a leading checkbox column. The table does not own the
//! selection: the caller pushes the checked ids in with [`DataTable::set_checked`]
//! and receives toggles through the handlers.

use std::collections::HashSet;
use std::rc::Rc;

use gpui::{
    AnyElement, App, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};

use super::column::{Column, ColumnWidth};
use crate::components::primitives::checkbox::Checkbox;
use crate::domain::selection::PageCheckState;
use crate::theme::colors::Palette;

/// Rows shown in a selectable table need a stable key
pub trait TableRow: Clone + 'static {
    fn row_key(&self) -> u64;
}

type RowToggleHandler<R> = Rc<dyn Fn(&R, bool, &mut Window, &mut App) + 'static>;
type AllToggleHandler = Rc<dyn Fn(bool, &mut Window, &mut App) + 'static>;

const CHECKBOX_COLUMN_WIDTH: f32 = 44.0;

/// DataTable component
pub struct DataTable<R: TableRow> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    checked: HashSet<u64>,
    header_state: PageCheckState,
    row_height: f32,
    header_height: f32,
    loading: bool,
    loading_message: SharedString,
    empty_message: SharedString,
    error_message: Option<SharedString>,
    on_toggle_row: Option<RowToggleHandler<R>>,
    on_toggle_all: Option<AllToggleHandler>,
}

impl<R: TableRow> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            checked: HashSet::new(),
            header_state: PageCheckState::None,
            row_height: 40.0,
            header_height: 40.0,
            loading: false,
            loading_message: "Loading...".into(),
            empty_message: "No data".into(),
            error_message: None,
            on_toggle_row: None,
            on_toggle_all: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set the keys of rows that render checked and the header checkbox state
    pub fn set_checked(&mut self, checked: HashSet<u64>, header_state: PageCheckState) {
        self.checked = checked;
        self.header_state = header_state;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the messages shown while loading and when there are no rows
    pub fn set_messages(
        &mut self,
        loading: impl Into<SharedString>,
        empty: impl Into<SharedString>,
    ) {
        self.loading_message = loading.into();
        self.empty_message = empty.into();
    }

    /// Show an error banner above the rows
    pub fn set_error(&mut self, message: Option<SharedString>) {
        self.error_message = message;
    }

    /// Set the per-row checkbox handler
    pub fn on_toggle_row(&mut self, handler: impl Fn(&R, bool, &mut Window, &mut App) + 'static) {
        self.on_toggle_row = Some(Rc::new(handler));
    }

    /// Set the header checkbox handler
    pub fn on_toggle_all(&mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) {
        self.on_toggle_all = Some(Rc::new(handler));
    }

    fn sized_cell(width: ColumnWidth) -> gpui::Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        let mut checkbox = Checkbox::new("data-table-check-all")
            .checked(self.header_state == PageCheckState::All)
            .indeterminate(self.header_state == PageCheckState::Partial)
            .disabled(self.rows.is_empty());
        if let Some(handler) = self.on_toggle_all.clone() {
            checkbox = checkbox.on_change(move |checked, window, cx| handler(checked, window, cx));
        }

        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(Palette::table_header_bg())
            .border_b_1()
            .border_color(Palette::border())
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex_none()
                    .flex()
                    .justify_center()
                    .child(checkbox),
            )
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(Palette::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> AnyElement {
        let key = row.row_key();
        let checked = self.checked.contains(&key);
        let bg = if checked {
            Palette::table_row_selected()
        } else if index % 2 == 0 {
            Palette::content_bg()
        } else {
            Palette::table_row_alt()
        };

        let mut checkbox = Checkbox::new(SharedString::from(format!("row-check-{key}"))).checked(checked);
        if let Some(handler) = self.on_toggle_row.clone() {
            let row = row.clone();
            checkbox = checkbox.on_change(move |checked, window, cx| handler(&row, checked, window, cx));
        }

        div()
            .id(SharedString::from(format!("row-{key}")))
            .min_h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(Palette::table_row_hover()))
            .border_b_1()
            .border_color(Palette::border())
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex_none()
                    .flex()
                    .justify_center()
                    .child(checkbox),
            )
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .px_3()
                    .py_1()
                    .text_sm()
                    .text_color(Palette::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
            .into_any_element()
    }

    /// Render a centered status message
    fn render_message(&self, message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(Palette::text_muted())
            .child(message)
    }
}

impl<R: TableRow> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::content_bg())
            .border_1()
            .border_color(Palette::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header());

        if let Some(error) = self.error_message.clone() {
            table = table.child(
                div()
                    .w_full()
                    .px_3()
                    .py_2()
                    .text_sm()
                    .text_color(Palette::danger())
                    .border_b_1()
                    .border_color(Palette::border())
                    .child(error),
            );
        }

        if self.rows.is_empty() {
            let message = if self.loading {
                self.loading_message.clone()
            } else {
                self.empty_message.clone()
            };
            table.child(self.render_message(message))
        } else {
            let rows: Vec<AnyElement> = self
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| self.render_row(row, i))
                .collect();
            table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .when(self.loading, |this| this.opacity(0.6))
                    .children(rows),
            )
        }
    }
}
