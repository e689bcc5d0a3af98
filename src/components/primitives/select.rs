//! Select Component
//!
//! Rendered as a compact segmented control; the options are always visible.

use std::rc::Rc;

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
};

use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::theme::colors::Palette;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A select component
#[derive(IntoElement)]
pub struct Select {
    id: SharedString,
    selected: Option<String>,
    options: Vec<SelectOption>,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            disabled: false,
            on_change: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler; called only when a different option is picked
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let id = self.id;
        let selected = self.selected;
        let disabled = self.disabled;
        let on_change = self.on_change;

        div()
            .flex()
            .items_center()
            .gap_1()
            .p_px()
            .rounded_md()
            .border_1()
            .border_color(Palette::border())
            .children(self.options.into_iter().enumerate().map(|(index, option)| {
                let is_selected = selected.as_deref() == Some(option.value.as_str());
                let mut button = Button::new(
                    SharedString::from(format!("{id}-{index}")),
                    option.label,
                )
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .selected(is_selected)
                .disabled(disabled);

                if let (false, Some(handler)) = (is_selected, on_change.clone()) {
                    let value = option.value;
                    button = button.on_click(move |_event, window, cx| handler(&value, window, cx));
                }
                button
            }))
    }
}
