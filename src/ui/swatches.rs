use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::to_term_color;
use super::theme::Theme;
use crate::app::{App, Focus};
use crate::color::{self, Color};
use crate::engine::SwatchKey;

/// Draws the live palette as a row of swatches plus an add slot while
/// there is room.
pub fn render_palette(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.engine.palette();
    let slots = palette.len() + usize::from(!palette.is_full());
    let constraints = vec![Constraint::Ratio(1, slots as u32); slots];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, color) in palette.colors().iter().enumerate() {
        let selected = app.focus == Focus::Live && index == app.selected_swatch;
        let copied = app.engine.is_copied(SwatchKey::Live(index));
        frame.render_widget(swatch(*color, index == 0, selected, copied, app.dark_mode), columns[index]);
    }

    if !palette.is_full() {
        let dark = app.dark_mode;
        let add_slot = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "+",
                Style::default()
                    .fg(Theme::dim(dark))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("a: add", Style::default().fg(Theme::dim(dark)))),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Theme::secondary(dark))),
        );
        frame.render_widget(add_slot, columns[palette.len()]);
    }
}

fn swatch(color: Color, primary: bool, selected: bool, copied: bool, dark: bool) -> Paragraph<'static> {
    let text_color = Theme::overlay_text(color::contrast_class(color));
    let text_style = Style::default().fg(text_color).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(color.display_hex(), text_style)),
    ];
    if primary {
        lines.push(Line::from(Span::styled("primary", Style::default().fg(text_color))));
    }
    if copied {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Copied! ",
            Style::default()
                .fg(Theme::copied())
                .bg(ratatui::style::Color::Black)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let border_style = if selected {
        Style::default()
            .fg(Theme::selection_marker())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::secondary(dark))
    };

    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(to_term_color(color)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style),
        )
}
