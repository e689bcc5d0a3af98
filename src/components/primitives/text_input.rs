//! NumberInput Component
//!
//! A focusable field that accepts digits only. Enter submits the value.

use gpui::{
    ClickEvent, Context, ElementId, FocusHandle, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::FluentBuilder, px,
};

use crate::theme::colors::Palette;

/// Longest accepted input; keeps the value inside `u64`
const MAX_DIGITS: usize = 9;

/// A numeric input component
pub struct NumberInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    disabled: bool,
    focus_handle: FocusHandle,
    on_submit: Option<Box<dyn Fn(u64, &mut Context<Self>) + 'static>>,
}

impl NumberInput {
    /// Create a new number input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            disabled: false,
            focus_handle: cx.focus_handle(),
            on_submit: None,
        }
    }

    /// Parsed value, if any digits were typed
    pub fn value(&self) -> Option<u64> {
        self.value.parse().ok()
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the submit handler
    pub fn on_submit(&mut self, handler: impl Fn(u64, &mut Context<Self>) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    /// Fire the submit handler with the current value
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let Some(value) = self.value() else {
            return;
        };
        if let Some(handler) = self.on_submit.as_ref() {
            handler(value, cx);
        }
        self.value.clear();
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let key = event.keystroke.key.as_str();
        if key == "enter" {
            self.submit(cx);
        } else if apply_key(&mut self.value, key) {
            cx.notify();
        }
    }
}

/// Apply one key press to `value`; returns whether the text changed
fn apply_key(value: &mut String, key: &str) -> bool {
    match key {
        "backspace" => value.pop().is_some(),
        digit if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
            if value.len() >= MAX_DIGITS || (value.is_empty() && digit == "0") {
                return false;
            }
            value.push_str(digit);
            true
        }
        _ => false,
    }
}

impl Focusable for NumberInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NumberInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            Palette::border_focus()
        } else {
            Palette::input_border()
        };

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), Palette::input_placeholder())
        } else {
            (SharedString::from(self.value.clone()), Palette::text_primary())
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_click(cx.listener(|this, _event: &ClickEvent, window, _cx| {
                this.focus_handle.focus(window);
            }))
            .px_3()
            .py_1()
            .bg(Palette::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(120.0))
            .when(self.disabled, |this| this.opacity(0.5))
            .child(display_text)
    }
}
