//! Feedback LEDs that light on an accepted press and turn themselves off 200 ms later.
//!
//! The timing rules live in [`IndicatorTimer`], which is plain data driven by explicit
//! instants. On hardware each LED gets its own task ([`IndicatorLed`]) that owns the pin,
//! so a press never waits on an LED and an LED never touches anything but its own pin.

use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::OutputPin;
use portable_atomic::{AtomicBool, Ordering};

/// How long an indicator stays lit after its most recent trigger.
pub const INDICATOR_ON_DURATION: Duration = Duration::from_millis(200);

// ============================================================================
// IndicatorTimer - One-shot off deadline
// ============================================================================

/// One-shot "turn off at" deadline for a single indicator.
///
/// Triggering while armed replaces the deadline with one measured from the new trigger, so
/// the LED stays lit [`INDICATOR_ON_DURATION`] after the latest press. Triggers never stack.
///
/// # Example
///
/// ```rust
/// use digit_pad::indicator::{INDICATOR_ON_DURATION, IndicatorTimer};
/// use embassy_time::{Duration, Instant};
///
/// let mut timer = IndicatorTimer::new();
/// let pressed_at = Instant::from_millis(1_000);
/// assert_eq!(timer.trigger(pressed_at), pressed_at + INDICATOR_ON_DURATION);
///
/// assert!(!timer.expire(pressed_at + Duration::from_millis(199)));
/// assert!(timer.expire(pressed_at + Duration::from_millis(200)));
/// assert!(!timer.expire(pressed_at + Duration::from_millis(300))); // already off
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct IndicatorTimer {
    deadline: Option<Instant>,
}

impl IndicatorTimer {
    /// A disarmed timer (LED off).
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms (or re-arms) the timer at `now` and returns the new off deadline.
    pub fn trigger(&mut self, now: Instant) -> Instant {
        let deadline = now + INDICATOR_ON_DURATION;
        self.deadline = Some(deadline);
        deadline
    }

    /// Disarms the timer if `now` has reached the deadline.
    ///
    /// Returns `true` exactly once per arming: the moment the LED should go off.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether the LED should currently be lit.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending off deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

// ============================================================================
// Indicator - Anything a press can light
// ============================================================================

/// A feedback output that an accepted press can trigger.
///
/// `trigger` must return immediately; turning the LED off later is the implementor's job.
pub trait Indicator {
    /// Light the indicator now and schedule it off after [`INDICATOR_ON_DURATION`].
    fn trigger(&self);
}

impl<T: Indicator + ?Sized> Indicator for &T {
    fn trigger(&self) {
        (**self).trigger();
    }
}

// ============================================================================
// IndicatorStatic - Shared between the handle and its task
// ============================================================================

/// Static resources for one task-driven indicator.
pub struct IndicatorStatic {
    triggered_at: Signal<CriticalSectionRawMutex, Instant>,
    lit: AtomicBool,
}

impl IndicatorStatic {
    /// Creates static resources for one indicator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triggered_at: Signal::new(),
            lit: AtomicBool::new(false),
        }
    }

    /// Hands a trigger instant to the indicator's task. Never blocks; a trigger the task
    /// has not picked up yet is replaced by this one.
    pub fn trigger_at(&self, now: Instant) {
        self.triggered_at.signal(now);
    }

    /// Whether the task currently has the LED lit.
    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.lit.load(Ordering::Acquire)
    }
}

impl Default for IndicatorStatic {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one indicator pin forever from the triggers posted to `indicator_static`.
///
/// Waits for a trigger while the LED is off. While it is on, waits for whichever comes
/// first: another trigger (which re-arms) or the off deadline.
pub async fn run_indicator<P>(mut pin: P, indicator_static: &IndicatorStatic) -> !
where
    P: OutputPin<Error = Infallible>,
{
    let mut timer = IndicatorTimer::new();
    loop {
        let triggered_at = match timer.deadline() {
            Some(deadline) => {
                match select(indicator_static.triggered_at.wait(), Timer::at(deadline)).await {
                    Either::First(triggered_at) => Some(triggered_at),
                    Either::Second(()) => None,
                }
            }
            None => Some(indicator_static.triggered_at.wait().await),
        };

        match triggered_at {
            Some(triggered_at) => {
                timer.trigger(triggered_at);
                let Ok(()) = pin.set_high();
                indicator_static.lit.store(true, Ordering::Release);
            }
            None => {
                if timer.expire(Instant::now()) {
                    let Ok(()) = pin.set_low();
                    indicator_static.lit.store(false, Ordering::Release);
                }
            }
        }
    }
}

// ============================================================================
// IndicatorLed - Task-backed handle (device only)
// ============================================================================

#[cfg(not(feature = "host"))]
pub use device::IndicatorLed;

#[cfg(not(feature = "host"))]
mod device {
    use embassy_executor::Spawner;
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Level, Output, Pin};
    use embassy_time::Instant;

    use super::{Indicator, IndicatorStatic, run_indicator};
    use crate::{Error, Result};

    /// Handle to a feedback LED driven by its own background task.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # #![no_std]
    /// # #![no_main]
    /// # #[panic_handler]
    /// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
    /// use digit_pad::indicator::{Indicator, IndicatorLed, IndicatorStatic};
    ///
    /// async fn example(p: embassy_rp::Peripherals, spawner: embassy_executor::Spawner) -> digit_pad::Result<()> {
    ///     static GREEN_STATIC: IndicatorStatic = IndicatorStatic::new();
    ///     let green = IndicatorLed::new(p.PIN_11, &GREEN_STATIC, spawner)?;
    ///     green.trigger(); // on now, off in 200 ms
    ///     Ok(())
    /// }
    /// ```
    #[derive(Clone, Copy)]
    pub struct IndicatorLed {
        indicator_static: &'static IndicatorStatic,
    }

    impl IndicatorLed {
        /// Configure `pin` as a low output and spawn the task that owns it.
        ///
        /// # Errors
        ///
        /// Returns [`Error::TaskSpawn`] if the task pool is exhausted.
        pub fn new(
            pin: Peri<'static, impl Pin>,
            indicator_static: &'static IndicatorStatic,
            spawner: Spawner,
        ) -> Result<Self> {
            let output = Output::new(pin, Level::Low);
            spawner
                .spawn(indicator_task(output, indicator_static))
                .map_err(Error::TaskSpawn)?;
            Ok(Self { indicator_static })
        }

        /// Whether the LED is lit right now.
        #[must_use]
        pub fn is_lit(&self) -> bool {
            self.indicator_static.is_lit()
        }
    }

    impl Indicator for IndicatorLed {
        fn trigger(&self) {
            self.indicator_static.trigger_at(Instant::now());
        }
    }

    #[embassy_executor::task(pool_size = 2)]
    async fn indicator_task(
        output: Output<'static>,
        indicator_static: &'static IndicatorStatic,
    ) -> ! {
        run_indicator(output, indicator_static).await
    }
}
