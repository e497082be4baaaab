//! Servo duty-cycle mapping.
//!
//! Converts an angle or pulse width into a normalized duty value for a
//! PWM capability owned by the caller. Pure math; the mapper performs no
//! I/O and has no failure path.

use crate::math::map_range;

/// Full-scale duty of a 10-bit PWM peripheral.
pub const DEFAULT_MAX_DUTY: u16 = 1023;

/// One 50 Hz servo frame, microseconds.
pub const DEFAULT_PERIOD_US: u32 = 20_000;

const ANGLE_MAX: i32 = 180;

/// Maps servo commands onto a PWM duty range.
///
/// Out-of-range inputs are clamped, never rejected; the surrounding
/// tooling relies on the forgiving behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoMapper {
    max_duty: u16,
    period_us: u32,
}

impl Default for ServoMapper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DUTY)
    }
}

impl ServoMapper {
    /// Mapper for a PWM with the given full-scale duty and a 50 Hz frame.
    pub const fn new(max_duty: u16) -> Self {
        Self::with_period(max_duty, DEFAULT_PERIOD_US)
    }

    /// Mapper with an explicit PWM period.
    ///
    /// A zero period falls back to the 50 Hz default.
    pub const fn with_period(max_duty: u16, period_us: u32) -> Self {
        let period_us = if period_us == 0 {
            DEFAULT_PERIOD_US
        } else {
            period_us
        };
        Self {
            max_duty,
            period_us,
        }
    }

    /// Full-scale duty value of the target PWM.
    pub const fn max_duty(self) -> u16 {
        self.max_duty
    }

    /// PWM period in microseconds.
    pub const fn period_us(self) -> u32 {
        self.period_us
    }

    /// Duty for an angle, clamped to 0..=180 degrees.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn angle_to_duty(self, angle: i32) -> u16 {
        let angle = angle.clamp(0, ANGLE_MAX);
        map_range(angle, 0, ANGLE_MAX, 0, i32::from(self.max_duty)) as u16
    }

    /// Duty for a pulse width, scaled against one PWM period.
    #[allow(clippy::cast_possible_truncation)]
    pub fn pulse_us_to_duty(self, pulse_us: u32) -> u16 {
        let pulse = pulse_us.min(self.period_us);
        ((u64::from(pulse) * u64::from(self.max_duty)) / u64::from(self.period_us)) as u16
    }
}
