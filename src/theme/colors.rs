//! Colors - Catalog Theme Colors

use gpui::{Rgba, rgb};

/// Catalog color palette - All colors are accessed via associated functions
pub struct Palette;

impl Palette {
    // Primary colors
    /// Header background - museum red
    pub fn header_bg() -> Rgba { rgb(0xb50938) }
    /// Accent for checked boxes and active controls
    pub fn accent() -> Rgba { rgb(0x2563eb) }
    /// Accent hover
    pub fn accent_hover() -> Rgba { rgb(0x1d4ed8) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f3ef) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Selection panel background
    pub fn panel_bg() -> Rgba { rgb(0xfaf9f7) }
    /// Log panel background - Dark slate
    pub fn log_panel_bg() -> Rgba { rgb(0x1f2430) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Button colors
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }
    /// Checked row background
    pub fn table_row_selected() -> Rgba { rgb(0xeff6ff) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
