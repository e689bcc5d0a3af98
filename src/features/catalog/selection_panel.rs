//! Selection Panel
//!
//! Side panel listing the selected artworks across all pages.

use gpui::{
    AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::NumberInput;
use crate::domain::artwork::Artwork;
use crate::features::catalog::controller::CatalogController;
use crate::i18n::{Locale, t};
use crate::theme::colors::Palette;
use crate::utils::format::truncate;

const PANEL_WIDTH: f32 = 320.0;

/// Selection side panel
pub struct SelectionPanel {
    entities: AppEntities,
    controller: CatalogController,
    bulk_input: Entity<NumberInput>,
}

impl SelectionPanel {
    pub fn new(
        entities: AppEntities,
        controller: CatalogController,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let submit_controller = controller.clone();
        let bulk_input = cx.new(|cx| {
            let mut input = NumberInput::new("bulk-select-input", cx);
            input.set_placeholder(t(locale, "selection-bulk-placeholder"));
            input.on_submit(move |count, cx| submit_controller.bulk_select(count, cx));
            input
        });

        cx.observe(&entities.selection, |this, selection, cx| {
            let loading = selection.read(cx).is_bulk_loading();
            this.bulk_input.update(cx, |input, cx| {
                input.set_disabled(loading);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.bulk_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "selection-bulk-placeholder"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            bulk_input,
        }
    }

    fn render_item(&self, artwork: &Artwork, locale: Locale) -> impl IntoElement {
        let id = artwork.id;
        let controller = self.controller.clone();

        let mut details = div()
            .flex_1()
            .min_w(px(0.0))
            .flex()
            .flex_col()
            .gap_px()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(Palette::text_primary())
                    .child(truncate(artwork.display_title(), 60)),
            );
        if let Some(artist) = artwork.artist_display.as_deref() {
            details = details.child(
                div()
                    .text_xs()
                    .text_color(Palette::text_secondary())
                    .child(truncate(artist.lines().next().unwrap_or(artist), 50)),
            );
        }
        let dates = artwork.date_range();
        if !dates.is_empty() {
            details = details.child(
                div()
                    .text_xs()
                    .text_color(Palette::text_muted())
                    .child(dates),
            );
        }

        div()
            .id(SharedString::from(format!("selected-{id}")))
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .items_start()
            .gap_2()
            .border_b_1()
            .border_color(Palette::border())
            .hover(|s| s.bg(Palette::table_row_hover()))
            .child(details)
            .child(
                Button::ghost(
                    SharedString::from(format!("remove-selected-{id}")),
                    t(locale, "action-remove"),
                )
                .size(ButtonSize::Small)
                .on_click(move |_event, _window, cx| controller.remove_selected(id, cx)),
            )
    }
}

impl Render for SelectionPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let selection = self.entities.selection.read(cx);
        let count = selection.len();
        let bulk_loading = selection.is_bulk_loading();

        let items: Vec<_> = selection
            .map()
            .iter()
            .map(|artwork| self.render_item(artwork, locale))
            .collect();

        let list = if items.is_empty() {
            div()
                .id("selection-list")
                .flex_1()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(Palette::text_muted())
                .child(t(locale, "selection-empty"))
        } else {
            div()
                .id("selection-list")
                .flex_1()
                .overflow_y_scroll()
                .children(items)
        };

        let clear_controller = self.controller.clone();
        let bulk_input = self.bulk_input.clone();
        let bulk_label = if bulk_loading {
            t(locale, "selection-bulk-loading")
        } else {
            t(locale, "action-select")
        };

        div()
            .w(px(PANEL_WIDTH))
            .h_full()
            .flex_none()
            .flex()
            .flex_col()
            .bg(Palette::panel_bg())
            .border_l_1()
            .border_color(Palette::border())
            // Title and count
            .child(
                div()
                    .px_3()
                    .py_2()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(Palette::border())
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(Palette::text_primary())
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(t(locale, "selection-title")),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(Palette::text_secondary())
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        Button::secondary("clear-selection", t(locale, "action-clear-all"))
                            .size(ButtonSize::Small)
                            .disabled(count == 0)
                            .on_click(move |_event, _window, cx| clear_controller.clear_selection(cx)),
                    ),
            )
            // Bulk select
            .child(
                div()
                    .px_3()
                    .py_2()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .border_b_1()
                    .border_color(Palette::border())
                    .child(
                        div()
                            .text_xs()
                            .text_color(Palette::text_secondary())
                            .child(t(locale, "selection-bulk")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().flex_1().child(self.bulk_input.clone()))
                            .child(
                                Button::primary("bulk-select", bulk_label)
                                    .size(ButtonSize::Small)
                                    .disabled(bulk_loading)
                                    .on_click(move |_event, _window, cx| {
                                        bulk_input.update(cx, |input, cx| input.submit(cx));
                                    }),
                            ),
                    ),
            )
            .child(list)
    }
}
