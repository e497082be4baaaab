//! Bounded moving-average filter for noisy analog readings.

use heapless::Deque;

/// Mean of the last `WINDOW` samples.
///
/// The window never holds more than its configured size; the oldest
/// sample is evicted first. The average of an empty window is zero, not
/// an error.
#[derive(Debug, Default)]
pub struct MovingAverage<const WINDOW: usize> {
    samples: Deque<f32, WINDOW>,
}

impl<const WINDOW: usize> MovingAverage<WINDOW> {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn add(&mut self, value: f32) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above if the window was full.
        let _ = self.samples.push_back(value);
    }

    /// Mean of the currently held samples, or zero if none.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }

    /// Number of currently held samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all held samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
