use ratatui::style::Color;

use crate::color::ContrastClass;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary(dark: bool) -> Color {
        if dark {
            Color::Rgb(0x6d, 0x28, 0xd9)
        } else {
            Color::Rgb(0x4f, 0x46, 0xe5)
        }
    }

    /// Secondary/border color
    pub fn secondary(dark: bool) -> Color {
        if dark {
            Color::DarkGray
        } else {
            Color::Rgb(0xa5, 0xb4, 0xfc)
        }
    }

    /// Panel background
    pub fn background(dark: bool) -> Color {
        if dark {
            Color::Rgb(0x11, 0x18, 0x27)
        } else {
            Color::Rgb(0xee, 0xf2, 0xff)
        }
    }

    /// Normal text
    pub fn text(dark: bool) -> Color {
        if dark {
            Color::Rgb(0xf3, 0xf4, 0xf6)
        } else {
            Color::Rgb(0x31, 0x2e, 0x81)
        }
    }

    /// Dimmed/inactive text
    pub fn dim(dark: bool) -> Color {
        if dark {
            Color::Gray
        } else {
            Color::Rgb(0x63, 0x66, 0xf1)
        }
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// "Copied!" overlay
    pub fn copied() -> Color {
        Color::Rgb(0x22, 0xc5, 0x5e)
    }

    /// Text drawn on top of a swatch
    pub fn overlay_text(class: ContrastClass) -> Color {
        match class {
            ContrastClass::DarkText => Color::Rgb(0x1f, 0x29, 0x37),
            ContrastClass::LightText => Color::White,
        }
    }
}
