//! Constant glyph and color tables for the ten digits.
//!
//! Masks are listed in matrix wiring order (index 0 is the first LED on the data line),
//! so they can be applied to a [`Frame1d`](crate::led_strip::Frame1d) without a layout step.

use crate::digit::Digit;
use crate::led_strip::Rgb;

/// Number of LEDs on the 5×5 matrix.
pub const LED_MATRIX_LEN: usize = 25;

/// Lit/unlit pattern for one digit, in wiring order.
pub type GlyphMask = [bool; LED_MATRIX_LEN];

/// Digit → lit positions.
pub type GlyphTable = [GlyphMask; Digit::COUNT];

/// Digit → color used for every lit position of that digit.
pub type ColorTable = [Rgb; Digit::COUNT];

const fn mask(bits: [u8; LED_MATRIX_LEN]) -> GlyphMask {
    let mut out = [false; LED_MATRIX_LEN];
    let mut index = 0;
    while index < LED_MATRIX_LEN {
        out[index] = bits[index] != 0;
        index += 1;
    }
    out
}

/// Glyphs for 0 through 9.
///
/// Each group of five below is one physical row in wiring order. The first group is the
/// bottom row and the last is the top. The data line snakes, so groups 0, 2 and 4 run
/// right-to-left on the panel while groups 1 and 3 run left-to-right.
#[rustfmt::skip]
pub const GLYPHS: GlyphTable = [
    mask([0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 0]),
    mask([0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  0, 1, 1, 0, 0,  0, 0, 1, 0, 0]),
    mask([0, 1, 1, 1, 0,  0, 1, 0, 0, 0,  0, 1, 1, 1, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 1, 1, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 0, 0, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0]),
    mask([0, 1, 1, 1, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0,  0, 1, 0, 0, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 0,  0, 1, 0, 0, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 0, 0, 0,  0, 0, 0, 1, 0,  0, 1, 0, 0, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 0]),
    mask([0, 1, 0, 0, 0,  0, 0, 0, 1, 0,  0, 1, 1, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 0]),
];

/// Dim colors for 0 through 9, kept low so 25 LEDs stay well inside USB power.
pub const COLORS: ColorTable = [
    Rgb::new(15, 0, 0),   // red
    Rgb::new(0, 15, 0),   // green
    Rgb::new(0, 0, 15),   // blue
    Rgb::new(15, 15, 0),  // yellow
    Rgb::new(0, 15, 15),  // cyan
    Rgb::new(15, 0, 15),  // magenta
    Rgb::new(15, 15, 15), // gray-white
    Rgb::new(15, 9, 0),   // orange
    Rgb::new(7, 0, 7),    // purple
    Rgb::new(9, 2, 2),    // brown
];
