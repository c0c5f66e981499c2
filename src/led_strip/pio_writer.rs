//! WS2812 transmitter on one PIO state machine, fed by the CPU.
//!
//! The state machine generates every bit's high/low timing on its own, so interrupts on
//! the CPU (button edges, timers) cannot stretch a bit and corrupt the frame.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::Timer;
use fixed::types::U24F8;

use super::{Frame1d, FrameWriter, LATCH_DELAY, PIXEL_DURATION, pixel_word};

// PIO cycles spent in each phase of one bit (see the program below).
const T1: u32 = 2;
const T2: u32 = 5;
const T3: u32 = 3;
const CYCLES_PER_BIT: u32 = T1 + T2 + T3;

/// WS2812 bit rate in kHz.
const WS2812_KHZ: u32 = 800;

/// CPU-fed WS2812 driver for a single state machine.
///
/// Built once at start-up from a PIO `Common` and one of its state machines. Taking the
/// state machine by value means it is owned for the life of the program: no other code
/// can claim it or reprogram it.
pub struct PioWs2812<'d, PIO: Instance, const SM: usize, const N: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> PioWs2812<'d, PIO, SM, N> {
    /// Load the WS2812 program, configure the state machine for 800 kHz on `pin` and start it.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        // Each bit starts low for T3, goes high for T1, then stays high (1) or drops (0) for T2.
        let program = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap",
        );
        let loaded = common.load_program(&program.program);
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&loaded, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(WS2812_KHZ);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(Direction::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize, const N: usize> FrameWriter<N>
    for PioWs2812<'_, PIO, SM, N>
{
    async fn write_frame(&mut self, frame: &Frame1d<N>) {
        let tx = self.sm.tx();
        for color in frame.iter() {
            tx.wait_push(pixel_word(*color)).await;
        }

        // The FIFO can still hold several pixels; the latch gap starts only once the
        // last word has left the output shift register.
        while !tx.empty() {
            Timer::after(PIXEL_DURATION).await;
        }
        Timer::after(PIXEL_DURATION + LATCH_DELAY).await;
    }
}
