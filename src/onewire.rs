//! Single-wire bus protocol driver.
//!
//! Reset/presence handshake plus bit- and byte-level transfers over one
//! shared [`DigitalLine`], used for digital sensors addressed over a
//! single data wire. The line needs an external pull-up resistor so it
//! idles high whenever the bus is released.
//!
//! Transactions are synchronous and blocking for their full timing
//! budget. Interrupting one mid-stream leaves the bus in an undefined
//! state; the next operation must begin with a fresh
//! [`reset`](OneWireBus::reset).

use crate::clock::TimeBase;
use crate::line::{DigitalLine, Direction, LineError, Pull};

/// Bus timing windows, in microseconds.
mod timing {
    /// Reset low pulse.
    pub(super) const RESET_LOW: u32 = 480;
    /// Release-to-sample wait of the presence window.
    pub(super) const PRESENCE_SAMPLE: u32 = 70;
    /// Recovery after the presence window.
    pub(super) const RESET_RECOVERY: u32 = 410;
    /// Low hold when writing a 1 (narrow pulse).
    pub(super) const WRITE_ONE_LOW: u32 = 1;
    /// Low hold when writing a 0 (wide pulse).
    pub(super) const WRITE_ZERO_LOW: u32 = 60;
    /// Full write slot, recovery included.
    pub(super) const WRITE_SLOT: u32 = 60;
    /// Low pulse that opens a read slot.
    pub(super) const READ_INIT_LOW: u32 = 2;
    /// Release-to-sample wait inside a read slot.
    pub(super) const READ_SAMPLE: u32 = 8;
    /// Full read slot.
    pub(super) const READ_SLOT: u32 = 50;
}

/// Outcome of a bus reset.
///
/// `Absent` is a normal result, not an error; whether a missing device is
/// fatal is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Presence {
    /// At least one device pulled the line low in the presence window.
    Present,
    /// The line stayed high; nobody answered.
    Absent,
}

impl Presence {
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Single-wire bus over one digital line.
///
/// Holds no state between calls beyond the line's instantaneous
/// direction, which each operation flips between driving and sampling.
/// The driver never retries; retry policy belongs to the caller.
pub struct OneWireBus<L, C> {
    line: L,
    clock: C,
}

impl<L, C> OneWireBus<L, C>
where
    L: DigitalLine,
    C: TimeBase,
{
    /// Take ownership of a line and a clock.
    pub fn new(line: L, clock: C) -> Self {
        Self { line, clock }
    }

    /// Reset the bus and sample for a presence pulse.
    pub fn reset(&mut self) -> Result<Presence, LineError> {
        self.line.set_direction(Direction::Output);
        self.line.write(false)?;
        self.clock.delay_us(timing::RESET_LOW);

        self.line.set_direction(Direction::Input);
        self.line.set_pull(Pull::Up);
        self.clock.delay_us(timing::PRESENCE_SAMPLE);
        let level = self.line.read()?;
        self.clock.delay_us(timing::RESET_RECOVERY);

        Ok(if level {
            Presence::Absent
        } else {
            Presence::Present
        })
    }

    /// Transmit a single bit in one fixed-length slot.
    pub fn write_bit(&mut self, bit: bool) -> Result<(), LineError> {
        let low = if bit {
            timing::WRITE_ONE_LOW
        } else {
            timing::WRITE_ZERO_LOW
        };

        self.line.set_direction(Direction::Output);
        self.line.write(false)?;
        self.clock.delay_us(low);
        self.line.write(true)?;
        self.clock.delay_us(timing::WRITE_SLOT - low);
        Ok(())
    }

    /// Sample a single bit from a device-driven slot.
    pub fn read_bit(&mut self) -> Result<bool, LineError> {
        self.line.set_direction(Direction::Output);
        self.line.write(false)?;
        self.clock.delay_us(timing::READ_INIT_LOW);

        self.line.set_direction(Direction::Input);
        self.line.set_pull(Pull::Up);
        self.clock.delay_us(timing::READ_SAMPLE);
        let bit = self.line.read()?;
        self.clock
            .delay_us(timing::READ_SLOT - timing::READ_INIT_LOW - timing::READ_SAMPLE);
        Ok(bit)
    }

    /// Transmit one byte, least significant bit first.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), LineError> {
        let mut byte = byte;
        for _ in 0..8 {
            self.write_bit(byte & 0x01 != 0)?;
            byte >>= 1;
        }
        Ok(())
    }

    /// Read one byte, least significant bit first.
    pub fn read_byte(&mut self) -> Result<u8, LineError> {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit()? {
                byte |= 1 << i;
            }
        }
        Ok(byte)
    }

    /// Release the line and clock.
    pub fn free(self) -> (L, C) {
        (self.line, self.clock)
    }
}
