#![no_std]

//! Bit-banged single-line peripheral drivers and the signal conditioning
//! primitives the surrounding sensor and display tooling builds on.
//!
//! Drivers consume platform capabilities ([`DigitalLine`], [`TimeBase`])
//! as opaque handles and never acquire I/O themselves. Every operation is
//! synchronous and blocking for its full timing budget; callers needing
//! responsiveness run the drivers on a dedicated execution context and
//! treat each call as an atomic, uninterruptible unit.

pub mod clock;
pub mod filter;
pub mod line;
pub mod math;
pub mod onewire;
pub mod pixel;
pub mod servo;

pub use clock::{EmbassyClock, Tick, TimeBase};
pub use filter::{Debouncer, MovingAverage, Smoother, Timer};
pub use line::{DigitalLine, Direction, LineError, Pull};
pub use onewire::{OneWireBus, Presence};
pub use pixel::{PixelBuffer, PixelBus};
pub use servo::ServoMapper;

pub use embassy_time::{Duration, Instant};
pub use smart_leds::{RGB8, SmartLedsWrite};
