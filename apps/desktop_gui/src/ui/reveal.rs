//! Letter-by-letter reveal of the generated draft.
//!
//! Purely cosmetic: the full draft is available for editing and sending the
//! moment it arrives; only the read-only preview is animated.

use std::time::{Duration, Instant};

/// Default tick period. An earlier revision of this feature ran at 10ms; the
/// shipped interval is one fixed value, overridable via `--reveal-interval-ms`.
pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 50;

/// Animation state: a fully-known source string and how much of it is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reveal {
    source: String,
    revealed_bytes: usize,
}

impl Reveal {
    /// Replace the source and hide everything again.
    pub fn restart(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.revealed_bytes = 0;
    }

    pub fn clear(&mut self) {
        self.restart(String::new());
    }

    /// Reveal one more character. No-op once the whole source is visible;
    /// never splits a multi-byte character.
    pub fn tick(&mut self) -> bool {
        match self.source[self.revealed_bytes..].chars().next() {
            Some(ch) => {
                self.revealed_bytes += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn revealed_chars(&self) -> usize {
        self.visible().chars().count()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_bytes == self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Frame-loop driver for [`Reveal`]: owns the fixed tick period and the next
/// deadline. Cancelling drops the deadline, so no tick can fire afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTicker {
    interval: Duration,
    next_tick_at: Option<Instant>,
}

impl RevealTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick_at: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self, now: Instant) {
        self.next_tick_at = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_tick_at = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_tick_at.is_some()
    }

    /// Apply every tick period that elapsed up to `now` (frames can be slower
    /// than the tick period). Stops scheduling once the reveal completes.
    pub fn advance(&mut self, reveal: &mut Reveal, now: Instant) {
        let Some(mut due) = self.next_tick_at else {
            return;
        };
        while now >= due {
            if !reveal.tick() {
                break;
            }
            due += self.interval;
        }
        self.next_tick_at = if reveal.is_complete() { None } else { Some(due) };
    }
}
