//! The bounded digit shown on the matrix and the interrupt-shared counter that holds it.
//!
//! See [`DigitCounter`] for the clamped increment/decrement rules.

use core::fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use crate::{Error, Result};

// ============================================================================
// Digit - A value in 0..=9
// ============================================================================

/// A single decimal digit, `0..=9`.
///
/// The range is part of the type: every `Digit` can index the glyph and color tables.
///
/// # Example
///
/// ```rust
/// use digit_pad::digit::Digit;
///
/// let four = Digit::new(4)?;
/// assert_eq!(four.incremented(), Some(Digit::new(5)?));
/// assert_eq!(Digit::MAX.incremented(), None);
/// assert!(Digit::new(10).is_err());
/// # Ok::<(), digit_pad::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// The lower clamp bound.
    pub const ZERO: Self = Self(0);

    /// The upper clamp bound.
    pub const MAX: Self = Self(9);

    /// Number of distinct digits.
    pub const COUNT: usize = 10;

    /// Creates a digit, rejecting values above 9.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The digit as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next digit up, or `None` at 9.
    #[must_use]
    pub const fn incremented(self) -> Option<Self> {
        if self.0 < Self::MAX.0 {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// The next digit down, or `None` at 0.
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        if self.0 > Self::ZERO.0 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-slot, latest-value channel from the input tasks to the main loop.
///
/// `signal` never blocks; a digit not yet taken by the main loop is overwritten, so bursts
/// of presses coalesce into one redraw.
pub type DigitSignal = Signal<CriticalSectionRawMutex, Digit>;

// ============================================================================
// DigitCounter - Interrupt-shared clamped counter
// ============================================================================

/// The counter stepped by the buttons.
///
/// The value lives in one atomic byte, so the main loop can read it with a single
/// indivisible load while the input contexts step it. Steps past either end are clamped:
/// they are not errors and they leave the value unchanged.
///
/// Only the input contexts should call [`increment`](Self::increment) and
/// [`decrement`](Self::decrement); everything else reads with [`get`](Self::get).
///
/// # Example
///
/// ```rust
/// use digit_pad::digit::{Digit, DigitCounter};
///
/// static COUNTER: DigitCounter = DigitCounter::new(Digit::ZERO);
///
/// assert_eq!(COUNTER.decrement(), None); // clamped at 0
/// assert_eq!(COUNTER.increment(), Some(Digit::new(1)?));
/// assert_eq!(COUNTER.get(), Digit::new(1)?);
/// # Ok::<(), digit_pad::Error>(())
/// ```
pub struct DigitCounter {
    value: AtomicU8,
}

impl DigitCounter {
    /// Creates a counter holding `initial`.
    #[must_use]
    pub const fn new(initial: Digit) -> Self {
        Self {
            value: AtomicU8::new(initial.0),
        }
    }

    /// Reads the current digit.
    #[must_use]
    pub fn get(&self) -> Digit {
        Digit(self.value.load(Ordering::Acquire))
    }

    /// Steps up by one. Returns the new digit, or `None` if already at 9.
    pub fn increment(&self) -> Option<Digit> {
        self.step(Digit::incremented)
    }

    /// Steps down by one. Returns the new digit, or `None` if already at 0.
    pub fn decrement(&self) -> Option<Digit> {
        self.step(Digit::decremented)
    }

    fn step(&self, next: fn(Digit) -> Option<Digit>) -> Option<Digit> {
        self.value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                next(Digit(raw)).map(u8::from)
            })
            .ok()
            .and_then(|previous| next(Digit(previous)))
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new(Digit::ZERO)
    }
}
