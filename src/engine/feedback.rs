use std::fmt;
use std::time::{Duration, Instant};

/// How long the "Copied!" marker stays up.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_millis(1000);

/// Identifies one swatch across the live palette and the saved list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwatchKey {
    Live(usize),
    Saved { palette: usize, color: usize },
}

impl fmt::Display for SwatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchKey::Live(index) => write!(f, "{index}"),
            SwatchKey::Saved { palette, color } => write!(f, "saved-{palette}-{color}"),
        }
    }
}

/// Pending auto-clear handed out by `mark_copied`. Pass it to `cancel` to
/// drop the clear before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket {
    id: u64,
    key: SwatchKey,
    due: Instant,
}

impl ClearTicket {
    pub fn key(&self) -> SwatchKey {
        self.key
    }

    #[cfg(test)]
    pub(crate) fn due(&self) -> Instant {
        self.due
    }
}

/// Source of the current time for feedback expiry.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Single "just copied" marker with one-shot clears.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    active: Option<(SwatchKey, u64)>,
    pending: Vec<ClearTicket>,
    next_id: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<SwatchKey> {
        self.active.map(|(key, _)| key)
    }

    pub fn is_active(&self, key: SwatchKey) -> bool {
        self.active() == Some(key)
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Makes `key` the active marker and schedules its clear.
    pub fn mark_copied(&mut self, key: SwatchKey, now: Instant) -> ClearTicket {
        let ticket = ClearTicket {
            id: self.next_id,
            key,
            due: now + COPY_FEEDBACK_TTL,
        };
        self.next_id += 1;
        self.active = Some((key, ticket.id));
        self.pending.push(ticket);
        ticket
    }

    /// Returns false when the ticket had already fired or been cancelled.
    pub fn cancel(&mut self, ticket: ClearTicket) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != ticket.id);
        self.pending.len() != before
    }

    /// Fires every clear due at or before `now`. A clear only resets the
    /// marker it was scheduled for.
    pub fn expire(&mut self, now: Instant) {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|ticket| ticket.due <= now);
        self.pending = waiting;
        for ticket in due {
            if matches!(self.active, Some((_, id)) if id == ticket.id) {
                self.active = None;
            }
        }
    }
}
