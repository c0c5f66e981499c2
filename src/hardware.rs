//! Fixed pin roles for the digit pad board.
//!
//! | Role | GPIO |
//! |---|---|
//! | LED matrix data (PIO0, state machine 0) | 7 |
//! | Button "A", decrement (to ground, pull-up) | 5 |
//! | Button "B", increment (to ground, pull-up) | 6 |
//! | Decrement indicator (green) | 11 |
//! | Increment indicator (blue) | 12 |
//! | Heartbeat (red) | 13 |

use embassy_rp::peripherals::{PIN_5, PIN_6, PIN_7, PIN_11, PIN_12, PIN_13, PIO0};
use embassy_rp::pio::InterruptHandler;
use embassy_rp::{Peri, Peripherals, bind_interrupts};

bind_interrupts!(
    /// PIO0 interrupt binding for the matrix state machine.
    pub struct Pio0Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    }
);

/// The peripherals the digit pad uses, each in its fixed role.
pub struct Hardware {
    /// PIO block that generates the WS2812 bit timing.
    pub pio: Peri<'static, PIO0>,
    /// LED matrix data line.
    pub matrix_pin: Peri<'static, PIN_7>,
    /// Button "A".
    pub decrement_button: Peri<'static, PIN_5>,
    /// Button "B".
    pub increment_button: Peri<'static, PIN_6>,
    /// Green LED, paired with button "A".
    pub decrement_led: Peri<'static, PIN_11>,
    /// Blue LED, paired with button "B".
    pub increment_led: Peri<'static, PIN_12>,
    /// Red LED.
    pub heartbeat_led: Peri<'static, PIN_13>,
}

impl Hardware {
    /// Take the digit pad's pins out of the board's peripherals.
    #[must_use]
    pub fn new(peripherals: Peripherals) -> Self {
        Self {
            pio: peripherals.PIO0,
            matrix_pin: peripherals.PIN_7,
            decrement_button: peripherals.PIN_5,
            increment_button: peripherals.PIN_6,
            decrement_led: peripherals.PIN_11,
            increment_led: peripherals.PIN_12,
            heartbeat_led: peripherals.PIN_13,
        }
    }
}

impl Default for Hardware {
    fn default() -> Self {
        Self::new(embassy_rp::init(embassy_rp::config::Config::default()))
    }
}
