use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::app::{App, AppEvent};

/// Frame/tick interval; also the resolution of copy-feedback expiry.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Waits up to `timeout` for terminal input. A quiet interval is a tick.
fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }
    Ok(map_event(event::read()?))
}

/// Key presses drive the app, key releases and repeats are dropped, and
/// anything else (resize, focus, mouse) just forces a redraw.
fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
        Event::Key(_) => None,
        _ => Some(AppEvent::Tick),
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    info!("session started");
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            if let AppEvent::KeyPress(_) = event {
                // Keep expiry moving while keys arrive faster than the tick.
                app.update(AppEvent::Tick);
            }
            app.update(event);
        }
    }
    info!(saved = app.engine.saved().len(), "session ended");
    Ok(())
}
