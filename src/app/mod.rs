mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Help,
}

/// Which collection the arrow keys and actions apply to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Live,
    Saved,
}
