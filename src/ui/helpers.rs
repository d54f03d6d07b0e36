use ratatui::style::Color as TermColor;

use crate::color::Color;

pub fn to_term_color(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb(r, g, b)
}

/// Centers `text` in `width` cells, truncating when it does not fit.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    format!("{text:^width$}")
}
