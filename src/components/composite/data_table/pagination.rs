//! Pagination Component
//!
//! Page navigation and rows-per-page picker for the DataTable.

use std::rc::Rc;

use gpui::{
    App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::components::primitives::select::{Select, SelectOption};
use crate::theme::colors::Palette;
use crate::utils::format::format_number;

/// Number of page buttons shown around the current page
const PAGE_WINDOW: u32 = 5;

type PageHandler = Rc<dyn Fn(u32, &mut Window, &mut App) + 'static>;
type RowsHandler = Rc<dyn Fn(u32, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_label: SharedString,
    rows_per_page: u32,
    rows_options: Vec<u32>,
    rows_label: SharedString,
    disabled: bool,
    on_page_change: Option<PageHandler>,
    on_rows_change: Option<RowsHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: u32, total_pages: u32, total_items: u64) -> Self {
        Self {
            current_page,
            total_pages: total_pages.max(1),
            total_items,
            items_label: "items".into(),
            rows_per_page: 0,
            rows_options: Vec::new(),
            rows_label: "Rows per page".into(),
            disabled: false,
            on_page_change: None,
            on_rows_change: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Show the rows-per-page picker
    pub fn rows_per_page(
        mut self,
        current: u32,
        options: &[u32],
        label: impl Into<SharedString>,
    ) -> Self {
        self.rows_per_page = current;
        self.rows_options = options.to_vec();
        self.rows_label = label.into();
        self
    }

    /// Ignore clicks while a page is in flight
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(u32, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the rows-per-page change handler
    pub fn on_rows_change(mut self, handler: impl Fn(u32, &mut Window, &mut App) + 'static) -> Self {
        self.on_rows_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        &self,
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        target: u32,
        enabled: bool,
        active: bool,
    ) -> impl IntoElement {
        let enabled = enabled && !self.disabled;
        let mut btn = div()
            .id(id.into())
            .px_2()
            .py_1()
            .min_w(gpui::px(28.0))
            .flex()
            .justify_center()
            .rounded_sm()
            .text_sm()
            .child(label.into());

        btn = if active {
            btn.bg(Palette::accent()).text_color(Palette::text_light())
        } else if enabled {
            btn.text_color(Palette::text_primary())
        } else {
            btn.text_color(Palette::text_muted())
        };

        if enabled && !active {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(Palette::table_row_hover()));
            if let Some(handler) = self.on_page_change.clone() {
                btn = btn.on_click(move |_event, window, cx| handler(target, window, cx));
            }
        }

        btn
    }
}

/// Page numbers to show as buttons, centered on `current` where possible
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let half = width / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total - width + 1);
    (start..start + width).collect()
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let can_prev = current > 1;
        let can_next = current < total;

        let rows_picker = (!self.rows_options.is_empty()).then(|| {
            let mut select = Select::new("rows-per-page")
                .selected(self.rows_per_page.to_string())
                .options(
                    self.rows_options
                        .iter()
                        .map(|n| SelectOption::new(n.to_string(), n.to_string()))
                        .collect(),
                )
                .disabled(self.disabled);
            if let Some(handler) = self.on_rows_change.clone() {
                select = select.on_change(move |value, window, cx| {
                    if let Ok(rows) = value.parse::<u32>() {
                        handler(rows, window, cx);
                    }
                });
            }
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_sm()
                        .text_color(Palette::text_secondary())
                        .child(self.rows_label.clone()),
                )
                .child(select)
        });

        let pages: Vec<_> = page_window(current, total, PAGE_WINDOW)
            .into_iter()
            .map(|page| {
                self.nav_button(
                    format!("page-{page}"),
                    page.to_string(),
                    page,
                    true,
                    page == current,
                )
            })
            .collect();

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .gap_4()
            .border_t_1()
            .border_color(Palette::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(Palette::text_secondary())
                    .child(format!("{} {}", format_number(self.total_items), self.items_label)),
            )
            .children(rows_picker)
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button("first-page", "«", 1, can_prev, false))
                    .child(self.nav_button("prev-page", "‹", current.saturating_sub(1), can_prev, false))
                    .children(pages)
                    .child(self.nav_button("next-page", "›", current + 1, can_next, false))
                    .child(self.nav_button("last-page", "»", total, can_next, false))
                    .child(
                        div()
                            .pl_2()
                            .text_sm()
                            .text_color(Palette::text_secondary())
                            .child(format!("{current} / {total}")),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_on_current_page() {
        assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_sticks_to_the_edges() {
        assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(19, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn window_shrinks_to_the_page_count() {
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
    }
}
