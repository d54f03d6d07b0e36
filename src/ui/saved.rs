use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{center, to_term_color};
use super::theme::Theme;
use crate::app::{App, Focus};
use crate::color;
use crate::engine::{Palette, SwatchKey};

const CELL_WIDTH: usize = 9;

/// Lines below the list: a spacer and the key hint.
const HINT_HEIGHT: u16 = 2;

/// Draws the saved list into `area`, scrolled so the selected row stays
/// on screen.
pub fn render_saved(frame: &mut Frame, area: Rect, app: &App) {
    let dark = app.dark_mode;
    let saved = app.engine.saved();
    if saved.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No saved palettes yet. Press 's' to save the current one.",
                Style::default().fg(Theme::dim(dark)),
            ))),
            area,
        );
        return;
    }

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(HINT_HEIGHT)])
        .split(area);

    let items: Vec<ListItem> = saved
        .entries()
        .iter()
        .enumerate()
        .map(|(palette_index, palette)| ListItem::new(saved_row(app, palette_index, palette)))
        .collect();
    let mut state = ListState::default().with_selected(Some(app.selected_saved));
    frame.render_stateful_widget(List::new(items), areas[0], &mut state);

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Tab: focus saved   l: Load palette",
                Style::default().fg(Theme::dim(dark)),
            )),
        ])),
        areas[1],
    );
}

fn saved_row(app: &App, palette_index: usize, palette: &Palette) -> Line<'static> {
    let dark = app.dark_mode;
    let row_selected = app.focus == Focus::Saved && palette_index == app.selected_saved;
    let marker_style = if row_selected {
        Style::default()
            .fg(Theme::selection_marker())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::dim(dark))
    };

    let mut spans = vec![
        Span::styled(if row_selected { "> " } else { "  " }, marker_style),
        Span::styled(
            format!("{:>2} ", palette_index + 1),
            Style::default().fg(Theme::dim(dark)),
        ),
    ];
    for (color_index, swatch) in palette.colors().iter().enumerate() {
        let key = SwatchKey::Saved {
            palette: palette_index,
            color: color_index,
        };
        let cursor = row_selected && color_index == app.selected_saved_color;
        let label = if app.engine.is_copied(key) {
            "Copied!".to_string()
        } else if cursor {
            swatch.display_hex()
        } else {
            String::new()
        };
        let mut style = Style::default()
            .bg(to_term_color(*swatch))
            .fg(Theme::overlay_text(color::contrast_class(*swatch)));
        if cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(center(&label, CELL_WIDTH), style));
    }
    Line::from(spans)
}
