//! Elapsed-time wrapper over the time base.

use embassy_time::Duration;

use crate::clock::{Tick, TimeBase};

/// Tracks time elapsed since a start point, millisecond domain.
///
/// Elapsed time stays non-negative even when the tick counter wraps
/// between the start point and the query.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Tick,
}

impl Timer {
    /// Start a timer at the clock's current time.
    pub fn start(clock: &impl TimeBase) -> Self {
        Self {
            started: clock.now_ms(),
        }
    }

    /// Time elapsed since the start point.
    pub fn elapsed(&self, clock: &impl TimeBase) -> Duration {
        clock.elapsed_ms(self.started)
    }

    /// Restart from the clock's current time.
    pub fn reset(&mut self, clock: &impl TimeBase) {
        self.started = clock.now_ms();
    }

    /// Whether at least `period` has elapsed since the start point.
    pub fn has_passed(&self, clock: &impl TimeBase, period: Duration) -> bool {
        self.elapsed(clock) >= period
    }

    /// Tick the timer was started at.
    pub const fn started_at(&self) -> Tick {
        self.started
    }
}
