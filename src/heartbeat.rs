//! Fixed 100 ms on / 100 ms off blink that shows the main loop is alive.
//!
//! [`Heartbeat`] only computes levels and deadlines; the main loop owns the pin and sleeps
//! until [`Heartbeat::next_toggle`]. Deadlines advance by exactly one half period per
//! toggle, so time spent rendering never stretches the blink.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::PinState;

/// Time spent at each level.
pub const HEARTBEAT_HALF_PERIOD: Duration = Duration::from_millis(100);

/// Heartbeat schedule.
///
/// # Example
///
/// ```rust
/// use digit_pad::heartbeat::Heartbeat;
/// use embassy_time::{Duration, Instant};
/// use embedded_hal::digital::PinState;
///
/// let mut heartbeat = Heartbeat::new(Instant::from_millis(0));
/// assert_eq!(heartbeat.level(), PinState::High);
/// assert_eq!(heartbeat.next_toggle(), Instant::from_millis(100));
///
/// assert_eq!(heartbeat.toggle(), PinState::Low);
/// assert_eq!(heartbeat.next_toggle(), Instant::from_millis(200));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Heartbeat {
    level: PinState,
    next_toggle: Instant,
}

impl Heartbeat {
    /// Starts high at `start`; the first toggle is one half period later.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            level: PinState::High,
            next_toggle: start + HEARTBEAT_HALF_PERIOD,
        }
    }

    /// Level the pin should be at now.
    #[must_use]
    pub const fn level(&self) -> PinState {
        self.level
    }

    /// When the level next flips.
    #[must_use]
    pub const fn next_toggle(&self) -> Instant {
        self.next_toggle
    }

    /// Flip the level and schedule the next flip. Returns the new level.
    pub fn toggle(&mut self) -> PinState {
        self.level = !self.level;
        self.next_toggle += HEARTBEAT_HALF_PERIOD;
        self.level
    }
}
