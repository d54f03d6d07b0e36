mod help;
mod helpers;
mod saved;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView, Focus};
use crate::engine::MAX_COLORS;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let dark = app.dark_mode;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::background(dark))),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palette Studio  ",
            Style::default().fg(Color::White).bg(Theme::primary(dark)),
        ),
        Span::raw(" "),
        Span::styled(
            "design with color harmony",
            Style::default()
                .fg(Theme::dim(dark))
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    frame.render_widget(panel(Text::from(header_lines), dark, None), layout[0]);

    match app.view {
        AppView::Help => {
            frame.render_widget(panel(help::build_help_text(app), dark, Some(" Help ")), layout[1]);
        }
        AppView::Palette => {
            let saved_rows = u16::try_from(app.engine.saved().len()).unwrap_or(u16::MAX);
            let saved_height = saved_rows
                .saturating_add(4)
                .min(layout[1].height / 2)
                .max(5);
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(7), Constraint::Length(saved_height)])
                .split(layout[1]);

            let palette_title = format!(
                " Palette {}/{MAX_COLORS}{} ",
                app.engine.palette().len(),
                if app.focus == Focus::Live { " *" } else { "" }
            );
            let palette_block = block(dark).title(palette_title);
            let inner = palette_block.inner(body[0]);
            frame.render_widget(palette_block, body[0]);
            swatches::render_palette(frame, inner, app);

            let saved_title = format!(
                " Saved palettes ({}){} ",
                app.engine.saved().len(),
                if app.focus == Focus::Saved { " *" } else { "" }
            );
            let saved_block = block(dark).title(saved_title);
            let inner = saved_block.inner(body[1]);
            frame.render_widget(saved_block, body[1]);
            saved::render_saved(frame, inner, app);
        }
    }

    frame.render_widget(panel(Text::from(status_line(app)), dark, None), layout[2]);
}

fn block(dark: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary(dark)))
}

fn panel<'a>(text: Text<'a>, dark: bool, title: Option<&'a str>) -> Paragraph<'a> {
    let mut panel_block = block(dark);
    if let Some(title) = title {
        panel_block = panel_block.title(title);
    }
    Paragraph::new(text)
        .style(Style::default().fg(Theme::text(dark)))
        .alignment(Alignment::Left)
        .block(panel_block)
}

fn status_line(app: &App) -> Line<'_> {
    let dark = app.dark_mode;
    match &app.status {
        Some(status) => Line::from(Span::styled(
            status.as_str(),
            Style::default()
                .fg(Theme::text(dark))
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "g: generate  a: add  x: remove  c: copy  s: save  Tab: saved  d: dark  ?: help  q: quit",
            Style::default().fg(Theme::dim(dark)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::AppEvent;
    use crate::color::SequenceRandom;
    use crate::engine::{ManualClock, NoopClipboard, PaletteEngine};
    use crossterm::event::KeyCode;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let engine = PaletteEngine::new(
            Box::new(SequenceRandom::new(&[0xa1b2c3, 0x000000, 0xffffff, 0x123456, 0xabcdef])),
            Box::new(NoopClipboard),
            Box::new(ManualClock::new()),
        );
        App::new(engine, false)
    }

    #[test]
    fn shows_uppercase_hex_for_each_swatch() {
        let screen = render(&app());
        for hex in ["#A1B2C3", "#000000", "#FFFFFF", "#123456", "#ABCDEF"] {
            assert!(screen.contains(hex), "{hex} missing");
        }
        assert!(screen.contains("Palette 5/8"));
        assert!(screen.contains("No saved palettes yet."));
    }

    #[test]
    fn shows_copied_overlay_and_saved_rows() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::Char('c')));
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        let screen = render(&app);
        assert!(screen.contains("Copied!"));
        assert!(screen.contains("Saved palettes (1)"));
    }

    #[test]
    fn saved_list_scrolls_to_the_selected_row() {
        let mut app = app();
        for _ in 0..30 {
            app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        }
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        for _ in 0..29 {
            app.update(AppEvent::KeyPress(KeyCode::Down));
        }
        assert_eq!(app.selected_saved, 29);

        let screen = render(&app);
        assert!(screen.contains("Saved palettes (30) *"));
        assert!(screen.contains("> 30 "), "selected row scrolled out of view");
        assert!(screen.contains("l: Load palette"));
    }

    #[test]
    fn saved_panel_height_survives_huge_lists() {
        let mut app = app();
        for _ in 0..300 {
            app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        }
        let screen = render(&app);
        assert!(screen.contains("Palette 5/8"));
        assert!(screen.contains("Saved palettes (300)"));
        assert!(screen.contains("   1 "));
    }

    #[test]
    fn help_view_lists_bindings() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        let screen = render(&app);
        assert!(screen.contains("Key bindings"));
    }
}
