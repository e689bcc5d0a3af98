//! Header Component
//!
//! The application header with title, selection toggle, and language switcher.
//! Both toggles are saved to the config file for the next launch.

use gpui::{
    App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::theme::colors::Palette;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    /// Write panel visibility and locale back to the config file
    fn save_ui_prefs(entities: &AppEntities, cx: &mut App) {
        let panel_open = entities.selection.read(cx).panel_open;
        let locale = entities.i18n.read(cx).locale;
        match cx.try_global::<ServiceHub>() {
            Some(hub) => hub.save_ui_prefs(panel_open, locale),
            None => tracing::warn!("Service hub not available, UI preferences not saved"),
        }
    }

    fn header_button(id: &'static str) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .bg(gpui::rgba(0xffffff22))
            .text_color(Palette::text_light())
            .text_size(px(13.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let selection = self.entities.selection.read(cx);
        let selected_count = selection.len();
        let panel_label = if selection.panel_open {
            t(locale, "action-hide-selection")
        } else {
            t(locale, "action-show-selection")
        };

        let panel_entities = self.entities.clone();
        let locale_entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .flex_none()
            .bg(Palette::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "app-title")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Self::header_button("toggle-selection-panel")
                            .flex()
                            .items_center()
                            .gap_2()
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                panel_entities.selection.update(cx, |selection, cx| {
                                    selection.toggle_panel();
                                    cx.notify();
                                });
                                Self::save_ui_prefs(&panel_entities, cx);
                            })
                            .child(panel_label)
                            .child(
                                div()
                                    .px_2()
                                    .rounded_full()
                                    .bg(Palette::content_bg())
                                    .text_color(Palette::header_bg())
                                    .text_size(px(11.0))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .child(selected_count.to_string()),
                            ),
                    )
                    .child(
                        Self::header_button("lang-switcher")
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                locale_entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                                Self::save_ui_prefs(&locale_entities, cx);
                            })
                            .child(locale.display_name()),
                    ),
            )
    }
}
