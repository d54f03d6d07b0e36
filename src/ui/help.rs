use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(app: &App) -> Text<'static> {
    let dark = app.dark_mode;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::primary(dark))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global", dark));
    lines.extend(section_lines(
        &[
            "q: Quit",
            "?: Toggle help",
            "d: Toggle dark mode",
            "Tab: Switch focus (palette / saved)",
            "esc: Back / clear status",
        ],
        dark,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Palette", dark));
    lines.extend(section_lines(
        &[
            "g/r: Generate new palette",
            "a/+: Add color (up to 8)",
            "x/Delete: Remove selected color (keeps at least 1)",
            "Left/Right: Select swatch",
            "c/Enter: Copy selected hex",
            "p: Pin the Copied! marker",
            "s: Save palette",
        ],
        dark,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Saved palettes", dark));
    lines.extend(section_lines(
        &[
            "Up/Down: Select palette",
            "Left/Right: Select swatch",
            "c/Enter: Copy selected hex",
            "l: Load palette",
        ],
        dark,
    ));

    Text::from(lines)
}

fn section_title(title: &str, dark: bool) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::dim(dark))
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], dark: bool) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text(dark)),
            ))
        })
        .collect()
}
