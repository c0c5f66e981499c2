//! What the main loop does each time it wakes.
//!
//! The loop sleeps until either the digit signal fires or the heartbeat is due. The
//! decision that follows is plain data in [`MainLoopState`], so the loop itself only waits
//! and carries out the returned [`LoopAction`].

use embassy_time::Instant;
use embedded_hal::digital::PinState;

use crate::digit::Digit;
use crate::heartbeat::Heartbeat;

// ============================================================================
// Redraw - Change detection for the matrix
// ============================================================================

/// Remembers the digit on the matrix and reports when a different one must be drawn.
///
/// The signal only says "something changed"; the counter is read again on wake, so a burst
/// of presses collapses into a single redraw of the settled value, and changes that cancel
/// out draw nothing.
///
/// # Example
///
/// ```rust
/// use digit_pad::digit::Digit;
/// use digit_pad::main_loop::Redraw;
///
/// let mut redraw = Redraw::new();
/// assert_eq!(redraw.next(Digit::ZERO), Some(Digit::ZERO)); // nothing shown yet
/// assert_eq!(redraw.next(Digit::ZERO), None);
/// assert_eq!(redraw.next(Digit::new(3)?), Some(Digit::new(3)?));
/// # Ok::<(), digit_pad::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct Redraw {
    shown: Option<Digit>,
}

impl Redraw {
    /// Nothing drawn yet; the first [`next`](Self::next) always asks for a draw.
    #[must_use]
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// The digit to draw for counter value `current`, or `None` if it is already shown.
    ///
    /// A returned digit is recorded as shown.
    pub fn next(&mut self, current: Digit) -> Option<Digit> {
        if self.shown == Some(current) {
            None
        } else {
            self.shown = Some(current);
            Some(current)
        }
    }

    /// The digit last handed out for drawing.
    #[must_use]
    pub const fn shown(&self) -> Option<Digit> {
        self.shown
    }
}

// ============================================================================
// MainLoopState - Redraw + heartbeat
// ============================================================================

/// Why the main loop woke up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Wake {
    /// An input task published a new digit.
    DigitSignalled,
    /// The heartbeat deadline passed.
    HeartbeatDue,
}

/// What the main loop should do after waking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoopAction {
    /// Clear and redraw the matrix with this digit.
    Render(Digit),
    /// Drive the heartbeat LED to this level.
    SetHeartbeat(PinState),
    /// Nothing visible changes.
    Nothing,
}

/// The main loop's state: what is on the matrix and where the heartbeat is.
///
/// # Example
///
/// ```rust
/// use digit_pad::digit::Digit;
/// use digit_pad::main_loop::{LoopAction, MainLoopState, Wake};
/// use embassy_time::Instant;
/// use embedded_hal::digital::PinState;
///
/// let mut state = MainLoopState::new(Instant::from_millis(0));
/// assert_eq!(state.handle(Wake::DigitSignalled, Digit::ZERO), LoopAction::Render(Digit::ZERO));
/// assert_eq!(
///     state.handle(Wake::HeartbeatDue, Digit::ZERO),
///     LoopAction::SetHeartbeat(PinState::Low)
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MainLoopState {
    redraw: Redraw,
    heartbeat: Heartbeat,
}

impl MainLoopState {
    /// Nothing drawn yet; heartbeat high from `start`.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            redraw: Redraw::new(),
            heartbeat: Heartbeat::new(start),
        }
    }

    /// Decide what to do after `wake`, given the counter value read on waking.
    ///
    /// Only a digit wake can draw; a heartbeat wake only toggles the LED.
    pub fn handle(&mut self, wake: Wake, current: Digit) -> LoopAction {
        match wake {
            Wake::DigitSignalled => self
                .redraw
                .next(current)
                .map_or(LoopAction::Nothing, LoopAction::Render),
            Wake::HeartbeatDue => LoopAction::SetHeartbeat(self.heartbeat.toggle()),
        }
    }

    /// The heartbeat schedule.
    #[must_use]
    pub const fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    /// The digit on the matrix, if any has been drawn.
    #[must_use]
    pub const fn shown(&self) -> Option<Digit> {
        self.redraw.shown()
    }
}
