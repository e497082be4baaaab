//! Addressable RGB LED bus driver.
//!
//! Serializes a frame of color triplets into the one-wire pulse stream
//! the WS2812 family expects: green, red, blue per pixel, most
//! significant bit first, the relative high/low widths of each pulse pair
//! encoding the bit, and a trailing low latch gap committing the frame.
//!
//! On a general-purpose scheduler the sub-microsecond widths are best
//! effort: the default [`TimeBase::delay_ns`] rounds up to whole
//! microseconds, so color fidelity on real hardware is approximate. The
//! emission loop stays allocation-free and runs inside a critical
//! section, leaving scheduling as the only remaining source of jitter.

use smart_leds::{RGB8, SmartLedsWrite};

use crate::clock::TimeBase;
use crate::line::{DigitalLine, Direction, LineError};

/// High width of a 0 bit (short-high/long-low), nanoseconds.
pub const ZERO_HIGH_NS: u32 = 400;
/// Low width of a 0 bit, nanoseconds.
pub const ZERO_LOW_NS: u32 = 850;
/// High width of a 1 bit (long-high/short-low), nanoseconds.
pub const ONE_HIGH_NS: u32 = 800;
/// Low width of a 1 bit, nanoseconds.
pub const ONE_LOW_NS: u32 = 450;
/// Low gap after the last bit that latches the frame, microseconds.
pub const LATCH_GAP_US: u32 = 80;

/// Frame of RGB triplets, insertion order = physical LED order.
///
/// `N` is the storage capacity; the frame length is fixed at
/// construction. Out-of-range writes are silent no-ops, matching the
/// lenient behavior the surrounding tooling expects.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: heapless::Vec<RGB8, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a frame of `len` black pixels.
    ///
    /// `len` is capped at the capacity `N`.
    pub fn new(len: usize) -> Self {
        let mut pixels = heapless::Vec::new();
        // Cannot fail: the length is capped at the capacity.
        let _ = pixels.resize(len.min(N), RGB8::new(0, 0, 0));
        Self { pixels }
    }

    /// Number of pixels in the frame.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Set one pixel; indices past the end of the frame are ignored.
    pub fn set(&mut self, index: usize, color: RGB8) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = color;
        }
    }

    /// Get one pixel.
    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    /// Set every pixel to `color`.
    ///
    /// Only mutates the buffer; nothing reaches the chain until a bus
    /// write.
    pub fn fill(&mut self, color: RGB8) {
        self.pixels.as_mut_slice().fill(color);
    }

    /// Iterate pixels in chain order.
    pub fn iter(&self) -> core::slice::Iter<'_, RGB8> {
        self.pixels.iter()
    }

    /// Pixels as a slice in chain order.
    pub fn as_slice(&self) -> &[RGB8] {
        self.pixels.as_slice()
    }
}

/// Bit-banged driver for one chain of addressable LEDs.
///
/// Owns the data line and the clock for its whole lifetime; exactly one
/// driver may hold a given line.
pub struct PixelBus<L, C> {
    line: L,
    clock: C,
}

impl<L, C> PixelBus<L, C>
where
    L: DigitalLine,
    C: TimeBase,
{
    /// Take ownership of a line and a clock.
    pub fn new(line: L, clock: C) -> Self {
        Self { line, clock }
    }

    /// Transmit one frame and latch it.
    ///
    /// Blocks for the full frame duration; the chain shows the new colors
    /// once the trailing latch gap has elapsed, before this returns.
    pub fn write<const N: usize>(&mut self, frame: &PixelBuffer<N>) -> Result<(), LineError> {
        SmartLedsWrite::write(self, frame.iter().copied())
    }

    /// Release the line and clock.
    pub fn free(self) -> (L, C) {
        (self.line, self.clock)
    }

    fn write_channel(&mut self, byte: u8) -> Result<(), LineError> {
        for shift in (0..8).rev() {
            self.write_pulse(byte & (1 << shift) != 0)?;
        }
        Ok(())
    }

    fn write_pulse(&mut self, bit: bool) -> Result<(), LineError> {
        let (high, low) = if bit {
            (ONE_HIGH_NS, ONE_LOW_NS)
        } else {
            (ZERO_HIGH_NS, ZERO_LOW_NS)
        };
        self.line.write(true)?;
        self.clock.delay_ns(high);
        self.line.write(false)?;
        self.clock.delay_ns(low);
        Ok(())
    }
}

impl<L, C> SmartLedsWrite for PixelBus<L, C>
where
    L: DigitalLine,
    C: TimeBase,
{
    type Error = LineError;
    type Color = RGB8;

    /// Serialize colors green-red-blue, most significant bit first.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.line.set_direction(Direction::Output);
        self.line.write(false)?;

        // The pulse train must not be preempted mid-bit.
        critical_section::with(|_| -> Result<(), LineError> {
            for color in iterator {
                let color = color.into();
                self.write_channel(color.g)?;
                self.write_channel(color.r)?;
                self.write_channel(color.b)?;
            }
            Ok(())
        })?;

        // Line idles low after the final pulse; holding it there for the
        // latch gap commits the frame. A longer gap still latches, so the
        // wait needs no critical section.
        self.clock.delay_us(LATCH_GAP_US);
        Ok(())
    }
}
