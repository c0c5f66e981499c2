//! Frame buffer and wire encoding for NeoPixel-style (WS2812) LEDs.
//!
//! A [`Frame1d`] holds one color per LED in wiring order. A [`FrameWriter`] sends a whole
//! frame down the single data line ("flush"); on hardware that is
//! [`PioWs2812`](pio_writer::PioWs2812), which lets a [PIO](crate#glossary) state machine
//! generate the bit timing.
//!
//! # Example: Write a Single Frame1d
//!
//! ```rust,no_run
//! use digit_pad::led_strip::{Frame1d, FrameWriter, colors};
//!
//! async fn example(writer: &mut impl FrameWriter<25>) {
//!     let mut frame = Frame1d::<25>::new();
//!     for pixel_index in (0..Frame1d::<25>::LEN).step_by(2) {
//!         frame.set(pixel_index, colors::BLUE);
//!     }
//!     writer.write_frame(&frame).await;
//! }
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};

use embassy_time::Duration;
use smart_leds::RGB8;

#[cfg(not(feature = "host"))]
pub mod pio_writer;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// The line must stay idle at least this long after the last bit for the LEDs to latch.
pub const LATCH_DELAY: Duration = Duration::from_micros(100);

/// Time to shift out one 24-bit pixel at 800 kHz (1.25 µs per bit).
pub const PIXEL_DURATION: Duration = Duration::from_micros(30);

// ============================================================================
// Frame1d - One color per LED
// ============================================================================

/// [`Rgb`] pixel data for an LED strip or panel, in wiring order.
///
/// See the [module documentation](mod@crate::led_strip) for usage examples.
///
/// Frames deref to `[Rgb; N]`, so pixels can also be read and mutated directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Turn every LED off (all three channels 0).
    pub fn clear(&mut self) {
        self.0 = [Rgb::new(0, 0, 0); N];
    }

    /// Set one LED.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Callers derive indexes from fixed-size glyph masks, so an
    /// out-of-range index is a programming fault, not a run-time condition.
    #[track_caller]
    pub fn set(&mut self, index: usize, color: Rgb) {
        let Some(pixel) = self.0.get_mut(index) else {
            panic!("pixel index {index} out of range for a {N}-LED frame");
        };
        *pixel = color;
    }

    /// Whether every LED is off.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|pixel| *pixel == Rgb::new(0, 0, 0))
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Wire encoding
// ============================================================================

/// Pack one pixel into the 32-bit word the PIO program shifts out, MSB first.
///
/// WS2812 LEDs expect green, then red, then blue, so green lands in bits 31..24, red in
/// 23..16 and blue in 15..8. The low byte is never shifted out (autopull threshold 24).
#[must_use]
pub const fn pixel_word(color: Rgb) -> u32 {
    ((color.g as u32) << 24) | ((color.r as u32) << 16) | ((color.b as u32) << 8)
}

// ============================================================================
// FrameWriter - One flush of a whole frame
// ============================================================================

/// Sends complete frames down the LED data line.
///
/// One call is one flush: every pixel in index order, then the idle gap that latches the
/// frame. The call returns only after the latch gap, so back-to-back calls never merge
/// into one frame.
pub trait FrameWriter<const N: usize> {
    /// Transmit `frame` and wait for it to latch.
    async fn write_frame(&mut self, frame: &Frame1d<N>);
}
