//! Monotonic time base and tick arithmetic.
//!
//! Every timed component in this crate measures time as 32-bit tick
//! samples taken from a [`TimeBase`]. Differences are computed modulo the
//! counter width, so a counter wrap between two samples still yields the
//! correct positive gap.

use embassy_time::{Duration, Instant};

/// One sample of a 32-bit monotonic counter.
///
/// A tick carries no unit of its own; the [`TimeBase`] method that
/// produced it fixes the domain (milliseconds or microseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(u32);

impl Tick {
    /// Wrap a raw counter value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw counter value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Ticks elapsed since `earlier`, modulo the counter width.
    ///
    /// Stays correct when the counter wrapped between the two samples.
    pub const fn wrapping_since(self, earlier: Tick) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Monotonic clock and bounded-delay capability.
///
/// Bus drivers depend on this trait for every delay they perform. None of
/// the waits is open-ended, so the trait has no failure modes.
pub trait TimeBase {
    /// Current millisecond tick.
    fn now_ms(&self) -> Tick;

    /// Current microsecond tick.
    fn now_us(&self) -> Tick;

    /// Busy-wait for `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for `ns` nanoseconds, best effort.
    ///
    /// The default rounds up to whole microseconds. Platforms with a
    /// tighter busy-wait primitive should override this; the pixel bus
    /// pulse widths depend on it.
    fn delay_ns(&mut self, ns: u32) {
        self.delay_us(ns.div_ceil(1000));
    }

    /// Time elapsed since a millisecond tick, wraparound-safe.
    fn elapsed_ms(&self, since: Tick) -> Duration {
        Duration::from_millis(u64::from(self.now_ms().wrapping_since(since)))
    }

    /// Time elapsed since a microsecond tick, wraparound-safe.
    fn elapsed_us(&self, since: Tick) -> Duration {
        Duration::from_micros(u64::from(self.now_us().wrapping_since(since)))
    }
}

/// [`TimeBase`] backed by the `embassy-time` driver.
///
/// Instants are truncated into the 32-bit tick domain;
/// [`Tick::wrapping_since`] keeps differences correct across the
/// resulting wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeBase for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> Tick {
        Tick::from_raw(Instant::now().as_millis() as u32)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn now_us(&self) -> Tick {
        Tick::from_raw(Instant::now().as_micros() as u32)
    }

    fn delay_us(&mut self, us: u32) {
        embassy_time::block_for(Duration::from_micros(u64::from(us)));
    }
}
