//! Debounced button presses that step the shared digit.
//!
//! The decision for one press ([`handle_press`]) is pure: it takes the press instant, the
//! button's [`Debouncer`], the counter and the paired [`Indicator`]. On hardware each
//! button gets its own task, woken by the GPIO interrupt on the falling edge, that calls
//! it and forwards changes to the main loop.

use embassy_time::{Duration, Instant};

use crate::digit::{Digit, DigitCounter};
use crate::indicator::Indicator;

// ============================================================================
// Constants
// ============================================================================

/// Presses closer together than this (on the same button) are treated as bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

// ============================================================================
// ButtonRole - What a press does
// ============================================================================

/// Which way a button steps the digit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum ButtonRole {
    /// Button "A": steps down, lights the green indicator.
    Decrement,
    /// Button "B": steps up, lights the blue indicator.
    Increment,
}

// ============================================================================
// PressOutcome - What a press did
// ============================================================================

/// Result of handling one falling edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum PressOutcome {
    /// Too soon after the last accepted press; ignored.
    Debounced,
    /// Accepted, but the digit was already at the limit in that direction.
    Clamped,
    /// Accepted and the digit moved to this value.
    Changed(Digit),
}

// ============================================================================
// Debouncer - Per-button acceptance window
// ============================================================================

/// Remembers when one button last produced an accepted press.
///
/// A press at `now` is accepted only if strictly more than [`DEBOUNCE_WINDOW`] has passed
/// since the last accepted one. The clock starts at boot, so presses in the first 200 ms
/// after boot are rejected too.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Debouncer {
    last_accepted: Instant,
}

impl Debouncer {
    /// A debouncer whose last accepted press is the boot instant.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Instant::from_ticks(0))
    }

    /// A debouncer that treats `instant` as the last accepted press.
    #[must_use]
    pub const fn starting_at(instant: Instant) -> Self {
        Self {
            last_accepted: instant,
        }
    }

    /// Accept or reject a press at `now`. On acceptance the window restarts at `now`.
    pub fn accept(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_accepted) > DEBOUNCE_WINDOW {
            self.last_accepted = now;
            true
        } else {
            false
        }
    }

    /// When the last accepted press happened.
    #[must_use]
    pub const fn last_accepted(&self) -> Instant {
        self.last_accepted
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle one falling edge of a button with the given `role`.
///
/// Rejected presses have no effect at all. Accepted presses step `counter` one place in
/// the role's direction and trigger `indicator`, unless the counter is already at the
/// limit, in which case nothing changes and the indicator stays dark.
///
/// # Example
///
/// ```rust
/// use digit_pad::button::{ButtonRole, Debouncer, PressOutcome, handle_press};
/// use digit_pad::digit::{Digit, DigitCounter};
/// use digit_pad::indicator::Indicator;
/// use embassy_time::Instant;
///
/// struct Dark;
/// impl Indicator for Dark {
///     fn trigger(&self) {}
/// }
///
/// let counter = DigitCounter::new(Digit::ZERO);
/// let mut debouncer = Debouncer::new();
/// let outcome = handle_press(
///     ButtonRole::Increment,
///     Instant::from_millis(1_000),
///     &mut debouncer,
///     &counter,
///     &Dark,
/// );
/// assert_eq!(outcome, PressOutcome::Changed(Digit::new(1)?));
/// # Ok::<(), digit_pad::Error>(())
/// ```
pub fn handle_press(
    role: ButtonRole,
    now: Instant,
    debouncer: &mut Debouncer,
    counter: &DigitCounter,
    indicator: &impl Indicator,
) -> PressOutcome {
    if !debouncer.accept(now) {
        return PressOutcome::Debounced;
    }

    let stepped = match role {
        ButtonRole::Decrement => counter.decrement(),
        ButtonRole::Increment => counter.increment(),
    };
    match stepped {
        Some(digit) => {
            indicator.trigger();
            PressOutcome::Changed(digit)
        }
        None => PressOutcome::Clamped,
    }
}

// ============================================================================
// Button - Pulled-up input (device only)
// ============================================================================

#[cfg(not(feature = "host"))]
pub use device::{Button, spawn_button_input};

#[cfg(not(feature = "host"))]
mod device {
    use embassy_executor::Spawner;
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Input, Pin, Pull};
    use embassy_time::Instant;

    use super::{ButtonRole, Debouncer, PressOutcome, handle_press};
    use crate::digit::{DigitCounter, DigitSignal};
    use crate::indicator::IndicatorLed;
    use crate::{Error, Result};

    /// A push button wired from the pin to ground, read through the internal pull-up.
    ///
    /// The pin reads low while pressed, so a press starts with a falling edge.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # #![no_std]
    /// # #![no_main]
    /// # #[panic_handler]
    /// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
    /// use digit_pad::button::Button;
    ///
    /// async fn example(p: embassy_rp::Peripherals) {
    ///     let mut button_a = Button::new(p.PIN_5);
    ///     loop {
    ///         button_a.wait_for_press().await;
    ///         // react to the press
    ///     }
    /// }
    /// ```
    pub struct Button<'a> {
        input: Input<'a>,
    }

    impl<'a> Button<'a> {
        /// Configure `pin` as an input with the internal pull-up enabled.
        #[must_use]
        pub fn new(pin: Peri<'a, impl Pin>) -> Self {
            Self {
                input: Input::new(pin, Pull::Up),
            }
        }

        /// Whether the button is held down right now.
        #[must_use]
        pub fn is_pressed(&self) -> bool {
            self.input.is_low()
        }

        /// Sleep until the next falling edge. The wake-up comes from the GPIO interrupt.
        ///
        /// Contact bounce produces several edges per press; filter them with a
        /// [`Debouncer`](super::Debouncer).
        pub async fn wait_for_press(&mut self) {
            self.input.wait_for_falling_edge().await;
        }
    }

    /// Spawn the task that turns presses of `button` into digit steps.
    ///
    /// The task owns the button and its debouncer. Each change is published on
    /// `digit_signal`; a value the main loop has not read yet is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the task pool is exhausted.
    pub fn spawn_button_input(
        button: Button<'static>,
        role: ButtonRole,
        counter: &'static DigitCounter,
        indicator: IndicatorLed,
        digit_signal: &'static DigitSignal,
        spawner: Spawner,
    ) -> Result<()> {
        spawner
            .spawn(button_input_task(
                button,
                role,
                counter,
                indicator,
                digit_signal,
            ))
            .map_err(Error::TaskSpawn)
    }

    #[embassy_executor::task(pool_size = 2)]
    async fn button_input_task(
        mut button: Button<'static>,
        role: ButtonRole,
        counter: &'static DigitCounter,
        indicator: IndicatorLed,
        digit_signal: &'static DigitSignal,
    ) -> ! {
        let mut debouncer = Debouncer::new();
        loop {
            button.wait_for_press().await;
            match handle_press(role, Instant::now(), &mut debouncer, counter, &indicator) {
                PressOutcome::Changed(digit) => {
                    defmt::info!("{} -> {}", role, digit);
                    digit_signal.signal(digit);
                }
                PressOutcome::Clamped => defmt::debug!("{} clamped at {}", role, counter.get()),
                PressOutcome::Debounced => defmt::trace!("{} bounce ignored", role),
            }
        }
    }
}
