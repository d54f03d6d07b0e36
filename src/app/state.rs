use crossterm::event::KeyCode;
use tracing::warn;

use crate::engine::{Action, MAX_COLORS, MIN_COLORS, PaletteEngine, SwatchKey};

use super::{AppEvent, AppView, Focus};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub engine: PaletteEngine,
    pub view: AppView,
    pub focus: Focus,
    pub selected_swatch: usize,
    pub selected_saved: usize,
    pub selected_saved_color: usize,
    pub dark_mode: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(engine: PaletteEngine, dark_mode: bool) -> Self {
        Self {
            running: true,
            engine,
            view: AppView::Palette,
            focus: Focus::Live,
            selected_swatch: 0,
            selected_saved: 0,
            selected_saved_color: 0,
            dark_mode,
            status: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.apply(Action::Tick),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    /// Swatch key under the cursor for the focused collection.
    pub fn selected_key(&self) -> Option<SwatchKey> {
        match self.focus {
            Focus::Live => Some(SwatchKey::Live(self.selected_swatch)),
            Focus::Saved if self.engine.saved().is_empty() => None,
            Focus::Saved => Some(SwatchKey::Saved {
                palette: self.selected_saved,
                color: self.selected_saved_color,
            }),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Palette,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Esc => self.clear_status(),
            KeyCode::Char('d') => self.dark_mode = !self.dark_mode,
            KeyCode::Char('g') | KeyCode::Char('r') => {
                self.apply(Action::Regenerate);
                self.selected_swatch = 0;
                self.status = Some("New palette generated.".to_string());
            }
            KeyCode::Char('a') | KeyCode::Char('+') => self.add_color(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('c') | KeyCode::Enter => self.copy_selected(),
            KeyCode::Char('p') => self.pin_copied(),
            KeyCode::Char('s') => {
                self.apply(Action::SavePalette);
                self.status = Some(format!("Palette saved ({}).", self.engine.saved().len()));
            }
            KeyCode::Char('l') => self.load_selected(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Left => self.move_swatch_left(),
            KeyCode::Right => self.move_swatch_right(),
            KeyCode::Up => self.move_saved_up(),
            KeyCode::Down => self.move_saved_down(),
            _ => {}
        }
    }

    fn apply(&mut self, action: Action) {
        if let Err(err) = self.engine.dispatch(action) {
            warn!(?action, "action rejected: {err}");
            self.status = Some(format!("{err}."));
        }
        self.clamp_selection();
    }

    fn add_color(&mut self) {
        if self.engine.palette().len() >= MAX_COLORS {
            self.status = Some(format!("Palette full ({MAX_COLORS} colors)."));
            return;
        }
        self.apply(Action::AddColor);
        self.selected_swatch = self.engine.palette().len() - 1;
        self.clear_status();
    }

    fn remove_selected(&mut self) {
        if self.focus != Focus::Live {
            self.status = Some("Saved palettes cannot be edited.".to_string());
            return;
        }
        if self.engine.palette().len() <= MIN_COLORS {
            self.status = Some("A palette keeps at least one color.".to_string());
            return;
        }
        self.apply(Action::RemoveColor(self.selected_swatch));
        self.clear_status();
    }

    fn copy_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            self.status = Some("No saved palettes yet.".to_string());
            return;
        };
        let color = self.engine.color_at(key);
        self.apply(Action::Copy(key));
        if let Some(color) = color {
            self.status = Some(format!("Copied {}.", color.display_hex()));
        }
    }

    /// Keeps the current "Copied!" marker up until the next copy.
    fn pin_copied(&mut self) {
        let pinned = match (self.engine.last_ticket(), self.engine.copied()) {
            (Some(ticket), Some(key)) if ticket.key() == key => self.engine.cancel_clear(ticket),
            _ => false,
        };
        self.status = Some(if pinned {
            "Copy marker pinned.".to_string()
        } else {
            "Nothing to pin.".to_string()
        });
    }

    fn load_selected(&mut self) {
        if self.engine.saved().is_empty() {
            self.status = Some("No saved palettes yet.".to_string());
            return;
        }
        self.apply(Action::LoadPalette(self.selected_saved));
        self.focus = Focus::Live;
        self.selected_swatch = 0;
        self.status = Some(format!("Loaded palette {}.", self.selected_saved + 1));
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Live if !self.engine.saved().is_empty() => Focus::Saved,
            _ => Focus::Live,
        };
    }

    fn move_swatch_left(&mut self) {
        let selected = match self.focus {
            Focus::Live => &mut self.selected_swatch,
            Focus::Saved => &mut self.selected_saved_color,
        };
        *selected = selected.saturating_sub(1);
    }

    fn move_swatch_right(&mut self) {
        let len = match self.focus {
            Focus::Live => self.engine.palette().len(),
            Focus::Saved => self.saved_row_len(),
        };
        let selected = match self.focus {
            Focus::Live => &mut self.selected_swatch,
            Focus::Saved => &mut self.selected_saved_color,
        };
        if *selected + 1 < len {
            *selected += 1;
        }
    }

    fn move_saved_up(&mut self) {
        if self.focus == Focus::Saved {
            self.selected_saved = self.selected_saved.saturating_sub(1);
            self.clamp_selection();
        }
    }

    fn move_saved_down(&mut self) {
        if self.focus == Focus::Saved && self.selected_saved + 1 < self.engine.saved().len() {
            self.selected_saved += 1;
            self.clamp_selection();
        }
    }

    fn saved_row_len(&self) -> usize {
        self.engine
            .saved()
            .get(self.selected_saved)
            .map(|palette| palette.len())
            .unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let live_len = self.engine.palette().len();
        self.selected_swatch = self.selected_swatch.min(live_len.saturating_sub(1));

        let saved_len = self.engine.saved().len();
        self.selected_saved = self.selected_saved.min(saved_len.saturating_sub(1));
        let row_len = self.saved_row_len();
        self.selected_saved_color = self.selected_saved_color.min(row_len.saturating_sub(1));
        if saved_len == 0 {
            self.focus = Focus::Live;
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::color::SequenceRandom;
    use crate::engine::{COPY_FEEDBACK_TTL, ManualClock, RecordingClipboard};

    fn app() -> (App, RecordingClipboard, ManualClock) {
        let clipboard = RecordingClipboard::default();
        let clock = ManualClock::new();
        let engine = PaletteEngine::new(
            Box::new(SequenceRandom::new(&[
                0xa1b2c3, 0x000000, 0xffffff, 0x123456, 0xabcdef, 0x0f0f0f, 0x777777,
            ])),
            Box::new(clipboard.clone()),
            Box::new(clock.clone()),
        );
        (App::new(engine, false), clipboard, clock)
    }

    fn press(app: &mut App, key: KeyCode) {
        app.update(AppEvent::KeyPress(key));
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut app, _, _) = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn add_selects_the_new_swatch_and_reports_full() {
        let (mut app, _, _) = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.engine.palette().len(), 6);
        assert_eq!(app.selected_swatch, 5);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.engine.palette().len(), MAX_COLORS);
        assert_eq!(app.status.as_deref(), Some("Palette full (8 colors)."));
    }

    #[test]
    fn removing_the_last_swatch_keeps_selection_valid() {
        let (mut app, _, _) = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_swatch, 4);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.engine.palette().len(), 4);
        assert_eq!(app.selected_swatch, 3);

        for _ in 0..5 {
            press(&mut app, KeyCode::Delete);
        }
        assert_eq!(app.engine.palette().len(), 1);
        assert_eq!(app.selected_swatch, 0);
        assert_eq!(
            app.status.as_deref(),
            Some("A palette keeps at least one color.")
        );
    }

    #[test]
    fn copy_marks_and_clears_on_tick() {
        let (mut app, clipboard, clock) = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(clipboard.writes.borrow().as_slice(), ["#000000"]);
        assert_eq!(app.engine.copied(), Some(SwatchKey::Live(1)));
        assert_eq!(app.status.as_deref(), Some("Copied #000000."));

        clock.advance(COPY_FEEDBACK_TTL - Duration::from_millis(1));
        app.update(AppEvent::Tick);
        assert_eq!(app.engine.copied(), Some(SwatchKey::Live(1)));
        clock.advance(Duration::from_millis(1));
        app.update(AppEvent::Tick);
        assert_eq!(app.engine.copied(), None);
    }

    #[test]
    fn pinned_marker_outlives_the_ttl() {
        let (mut app, _, clock) = app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.status.as_deref(), Some("Nothing to pin."));

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.status.as_deref(), Some("Copy marker pinned."));
        clock.advance(COPY_FEEDBACK_TTL * 3);
        app.update(AppEvent::Tick);
        assert_eq!(app.engine.copied(), Some(SwatchKey::Live(0)));

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.status.as_deref(), Some("Nothing to pin."));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('c'));
        clock.advance(COPY_FEEDBACK_TTL);
        app.update(AppEvent::Tick);
        assert_eq!(app.engine.copied(), None);
    }

    #[test]
    fn save_then_load_through_saved_focus() {
        let (mut app, clipboard, _) = app();
        let original = app.engine.palette().clone();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status.as_deref(), Some("Palette saved (1)."));

        press(&mut app, KeyCode::Char('g'));
        assert_ne!(app.engine.palette(), &original);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Saved);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.engine.copied(),
            Some(SwatchKey::Saved {
                palette: 0,
                color: 2
            })
        );
        assert_eq!(clipboard.writes.borrow().as_slice(), ["#ffffff"]);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.engine.palette(), &original);
        assert_eq!(app.focus, Focus::Live);
    }

    #[test]
    fn saved_focus_needs_saved_palettes() {
        let (mut app, _, _) = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Live);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.status.as_deref(), Some("No saved palettes yet."));
    }

    #[test]
    fn saved_palettes_are_read_only() {
        let (mut app, _, _) = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.engine.palette().len(), 5);
        assert_eq!(app.engine.saved().get(0).map(|p| p.len()), Some(5));
    }

    #[test]
    fn help_and_dark_mode_toggle() {
        let (mut app, _, _) = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, AppView::Help);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.engine.palette().len(), 5);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Palette);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.dark_mode);
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.dark_mode);
    }
}
