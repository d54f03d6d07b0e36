/// Palette engine: owns the live palette, the saved list and the copy
/// marker, and applies actions to them.
mod clipboard;
mod feedback;
mod palette;
mod saved;

use tracing::{debug, info, warn};

use crate::color::{Color, RandomSource};
use crate::error::{PaletteError, Result};

pub use clipboard::{ClipboardSink, NoopClipboard, SystemClipboard};
pub use feedback::{ClearTicket, Clock, CopyFeedback, SwatchKey, SystemClock};
pub use palette::{
    MAX_COLORS, MIN_COLORS, Palette, add_color, load_palette, regenerate, remove_color,
};
pub use saved::{SavedPalettes, save_palette};

#[cfg(test)]
pub(crate) use feedback::COPY_FEEDBACK_TTL;
#[cfg(test)]
pub(crate) use palette::DEFAULT_SIZE;
#[cfg(test)]
pub(crate) use clipboard::testing::{FailingClipboard, RecordingClipboard};
#[cfg(test)]
pub(crate) use feedback::testing::ManualClock;

/// Requests the presentation layer can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    AddColor,
    RemoveColor(usize),
    SavePalette,
    LoadPalette(usize),
    Copy(SwatchKey),
    Tick,
}

pub struct PaletteEngine {
    palette: Palette,
    saved: SavedPalettes,
    feedback: CopyFeedback,
    last_ticket: Option<ClearTicket>,
    random: Box<dyn RandomSource>,
    clipboard: Box<dyn ClipboardSink>,
    clock: Box<dyn Clock>,
}

impl PaletteEngine {
    /// Starts a session with a freshly generated palette.
    pub fn new(
        mut random: Box<dyn RandomSource>,
        clipboard: Box<dyn ClipboardSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let palette = regenerate(random.as_mut());
        Self {
            palette,
            saved: SavedPalettes::new(),
            feedback: CopyFeedback::new(),
            last_ticket: None,
            random,
            clipboard,
            clock,
        }
    }

    /// Replaces the generated opening palette, e.g. one given on the
    /// command line.
    pub fn starting_with(mut self, palette: Palette) -> Self {
        debug!(palette = ?palette.colors(), "starting from given palette");
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn saved(&self) -> &SavedPalettes {
        &self.saved
    }

    pub fn copied(&self) -> Option<SwatchKey> {
        self.feedback.active()
    }

    pub fn is_copied(&self, key: SwatchKey) -> bool {
        self.feedback.is_active(key)
    }

    /// Ticket of the most recent copy, if its clear is still pending.
    pub fn last_ticket(&self) -> Option<ClearTicket> {
        self.last_ticket
    }

    /// Drops a pending marker clear so the marker stays until superseded.
    pub fn cancel_clear(&mut self, ticket: ClearTicket) -> bool {
        let cancelled = self.feedback.cancel(ticket);
        if cancelled {
            debug!(key = %ticket.key(), "copy marker pinned");
            if self.last_ticket == Some(ticket) {
                self.last_ticket = None;
            }
        }
        cancelled
    }

    /// Color behind a swatch key, if the key names one.
    pub fn color_at(&self, key: SwatchKey) -> Option<Color> {
        match key {
            SwatchKey::Live(index) => self.palette.get(index),
            SwatchKey::Saved { palette, color } => {
                self.saved.get(palette).and_then(|saved| saved.get(color))
            }
        }
    }

    /// Applies one action. On error nothing changes.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Regenerate => {
                self.palette = regenerate(self.random.as_mut());
                debug!(palette = ?self.palette_strings(), "regenerated palette");
            }
            Action::AddColor => {
                let before = self.palette.len();
                self.palette = add_color(&self.palette, self.random.as_mut());
                if self.palette.len() == before {
                    debug!("palette full, add ignored");
                } else {
                    debug!(len = self.palette.len(), "added color");
                }
            }
            Action::RemoveColor(index) => {
                self.palette = remove_color(&self.palette, index)?;
                debug!(index, len = self.palette.len(), "removed color");
            }
            Action::SavePalette => {
                self.saved = save_palette(&self.palette, &self.saved);
                info!(saved = self.saved.len(), "saved palette");
            }
            Action::LoadPalette(index) => {
                let saved = self.saved.get(index).ok_or(PaletteError::InvalidArgument {
                    what: "saved palette",
                    index,
                    len: self.saved.len(),
                })?;
                self.palette = load_palette(saved);
                debug!(index, "loaded saved palette");
            }
            Action::Copy(key) => self.copy(key)?,
            Action::Tick => {
                self.feedback.expire(self.clock.now());
                if self.feedback.active().is_none() {
                    self.last_ticket = None;
                }
            }
        }
        Ok(())
    }

    fn copy(&mut self, key: SwatchKey) -> Result<()> {
        let color = self.color_at(key).ok_or_else(|| match key {
            SwatchKey::Live(index) => PaletteError::InvalidArgument {
                what: "swatch",
                index,
                len: self.palette.len(),
            },
            SwatchKey::Saved { palette, color } => match self.saved.get(palette) {
                Some(saved) => PaletteError::InvalidArgument {
                    what: "saved swatch",
                    index: color,
                    len: saved.len(),
                },
                None => PaletteError::InvalidArgument {
                    what: "saved palette",
                    index: palette,
                    len: self.saved.len(),
                },
            },
        })?;

        if let Err(err) = self.clipboard.write_text(&color.to_string()) {
            warn!(%key, %color, "clipboard write failed: {err}");
        }
        let ticket = self.feedback.mark_copied(key, self.clock.now());
        self.last_ticket = Some(ticket);
        debug!(%key, %color, "copied color");
        Ok(())
    }

    fn palette_strings(&self) -> Vec<String> {
        self.palette.colors().iter().map(Color::to_string).collect()
    }
}
