//! Digital line capability.
//!
//! One physical signal line with a configurable direction and pull state.
//! The hosting platform provides the implementation; drivers in this crate
//! consume it as an opaque handle. Exactly one driver owns a line at a
//! time — ownership enforces this, there is no internal locking.

/// Signal direction of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Line is sampled; the level is set by the bus and pull state.
    Input,
    /// Line is driven by this side.
    Output,
}

/// Pull configuration of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Floating.
    #[default]
    None,
    /// Internal pull-up.
    Up,
    /// Internal pull-down.
    Down,
}

/// Errors returned by line operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// The operation is not valid for the line's current direction.
    InvalidState,
}

/// One physical digital signal line.
///
/// Every call takes immediate effect on the wire; there is no buffering.
/// `write` is valid only in [`Direction::Output`] and `read` only in
/// [`Direction::Input`]; implementations report
/// [`LineError::InvalidState`] otherwise, and a line is never read and
/// driven in the same instant.
pub trait DigitalLine {
    /// Switch the line direction.
    fn set_direction(&mut self, direction: Direction);

    /// Configure the pull state.
    fn set_pull(&mut self, pull: Pull);

    /// Drive the line to a logical level.
    fn write(&mut self, level: bool) -> Result<(), LineError>;

    /// Sample the current logical level.
    fn read(&mut self) -> Result<bool, LineError>;
}
