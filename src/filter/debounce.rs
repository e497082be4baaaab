//! Temporal debounce filter for noisy digital inputs.

use embassy_time::Duration;

use crate::clock::Tick;

/// Debounces one digital input.
///
/// A changed level is accepted only after the raw input has held it
/// longer than the configured threshold, so contact bounce is filtered
/// without missing a sustained change. The threshold is fixed at
/// construction; ticks are in the millisecond domain.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    accepted: bool,
    last_raw: bool,
    last_change: Tick,
    threshold: Duration,
}

impl Debouncer {
    /// Adopt `level` as the initial accepted state.
    pub const fn new(level: bool, threshold: Duration, now: Tick) -> Self {
        Self {
            accepted: level,
            last_raw: level,
            last_change: now,
            threshold,
        }
    }

    /// Feed one raw sample and return the accepted state.
    pub fn read(&mut self, level: bool, now: Tick) -> bool {
        if level != self.last_raw {
            // Raw transition; the hold window restarts.
            self.last_raw = level;
            self.last_change = now;
        }

        if level != self.accepted
            && u64::from(now.wrapping_since(self.last_change)) > self.threshold.as_millis()
        {
            self.accepted = level;
            self.last_change = now;
        }

        self.accepted
    }

    /// Last accepted state, without feeding a sample.
    pub const fn state(&self) -> bool {
        self.accepted
    }
}
