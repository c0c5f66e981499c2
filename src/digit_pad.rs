//! The assembled device: buttons, indicators, matrix and heartbeat wired together.
//!
//! See [`DigitPad`] for usage.

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_time::{Instant, Timer};
use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::button::{Button, ButtonRole, spawn_button_input};
use crate::digit::{Digit, DigitCounter, DigitSignal};
use crate::glyph::{COLORS, GLYPHS, LED_MATRIX_LEN};
use crate::hardware::{Hardware, Pio0Irqs};
use crate::indicator::{IndicatorLed, IndicatorStatic};
use crate::led_strip::pio_writer::PioWs2812;
use crate::main_loop::{LoopAction, MainLoopState, Wake};
use crate::renderer::Renderer;

type MatrixWriter = PioWs2812<'static, PIO0, 0, LED_MATRIX_LEN>;

/// Owns the main-loop side of the device: the matrix renderer and the heartbeat LED.
///
/// [`new`](Self::new) spawns one task per button and one per indicator; those run on their
/// own from then on. [`run`](Self::run) is the main loop and never returns.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
/// use digit_pad::digit_pad::DigitPad;
/// use digit_pad::hardware::Hardware;
///
/// async fn example(spawner: embassy_executor::Spawner) -> digit_pad::Result<()> {
///     let digit_pad = DigitPad::new(Hardware::default(), spawner)?;
///     digit_pad.run().await
/// }
/// ```
pub struct DigitPad {
    renderer: Renderer<'static, MatrixWriter>,
    heartbeat_led: Output<'static>,
    counter: &'static DigitCounter,
    digit_signal: &'static DigitSignal,
}

impl DigitPad {
    /// Configure every pin, start the button and indicator tasks and prepare the matrix.
    ///
    /// Call once; the tasks and their statics exist for the life of the program.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`](crate::Error::TaskSpawn) if a background task cannot
    /// be spawned (for example, when called a second time).
    pub fn new(hardware: Hardware, spawner: Spawner) -> Result<Self> {
        static COUNTER: DigitCounter = DigitCounter::new(Digit::ZERO);
        static DIGIT_SIGNAL: DigitSignal = DigitSignal::new();
        static DECREMENT_LED_STATIC: IndicatorStatic = IndicatorStatic::new();
        static INCREMENT_LED_STATIC: IndicatorStatic = IndicatorStatic::new();

        let Pio {
            mut common, sm0, ..
        } = Pio::new(hardware.pio, Pio0Irqs);
        let writer = PioWs2812::new(&mut common, sm0, hardware.matrix_pin);
        let renderer = Renderer::new(writer, &GLYPHS, &COLORS);

        let decrement_led =
            IndicatorLed::new(hardware.decrement_led, &DECREMENT_LED_STATIC, spawner)?;
        let increment_led =
            IndicatorLed::new(hardware.increment_led, &INCREMENT_LED_STATIC, spawner)?;

        spawn_button_input(
            Button::new(hardware.decrement_button),
            ButtonRole::Decrement,
            &COUNTER,
            decrement_led,
            &DIGIT_SIGNAL,
            spawner,
        )?;
        spawn_button_input(
            Button::new(hardware.increment_button),
            ButtonRole::Increment,
            &COUNTER,
            increment_led,
            &DIGIT_SIGNAL,
            spawner,
        )?;

        Ok(Self {
            renderer,
            heartbeat_led: Output::new(hardware.heartbeat_led, Level::Low),
            counter: &COUNTER,
            digit_signal: &DIGIT_SIGNAL,
        })
    }

    /// The main loop: show the starting digit, then redraw on every change while blinking
    /// the heartbeat.
    pub async fn run(mut self) -> ! {
        let mut state = MainLoopState::new(Instant::now());
        let Ok(()) = self.heartbeat_led.set_state(state.heartbeat().level());

        // Nothing is drawn yet, so the first wake always renders the starting digit.
        let mut wake = Wake::DigitSignalled;
        loop {
            match state.handle(wake, self.counter.get()) {
                LoopAction::Render(digit) => {
                    defmt::info!("drawing {}", digit);
                    self.renderer.render(digit).await;
                }
                LoopAction::SetHeartbeat(level) => {
                    let Ok(()) = self.heartbeat_led.set_state(level);
                }
                LoopAction::Nothing => {}
            }

            wake = match select(
                self.digit_signal.wait(),
                Timer::at(state.heartbeat().next_toggle()),
            )
            .await
            {
                Either::First(_) => Wake::DigitSignalled,
                Either::Second(()) => Wake::HeartbeatDue,
            };
        }
    }
}
