#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the heartbeat schedule.

use digit_pad::heartbeat::{HEARTBEAT_HALF_PERIOD, Heartbeat};
use embassy_time::{Duration, Instant};
use embedded_hal::digital::PinState;

// Link-time plumbing: embassy-time's `defmt` feature references defmt's logger,
// timestamp, and panic symbols, which no host crate provides. Logging is a no-op
// here and defmt panics forward to the standard panic machinery.
#[defmt::global_logger]
struct HostLogger;

#[allow(unsafe_code, reason = "defmt::Logger is an unsafe trait")]
unsafe impl defmt::Logger for HostLogger {
    fn acquire() {}
    unsafe fn flush() {}
    unsafe fn release() {}
    unsafe fn write(_bytes: &[u8]) {}
}

defmt::timestamp!("{=u64}", 0);

#[defmt::panic_handler]
fn defmt_panic() -> ! {
    core::panic!("defmt panic")
}

#[test]
fn heartbeat_starts_high_with_first_toggle_after_half_period() {
    let heartbeat = Heartbeat::new(Instant::from_millis(40));
    assert_eq!(heartbeat.level(), PinState::High);
    assert_eq!(heartbeat.next_toggle(), Instant::from_millis(140));
}

#[test]
fn heartbeat_alternates_levels_every_100_ms() {
    let start = Instant::from_millis(0);
    let mut heartbeat = Heartbeat::new(start);

    let mut levels = Vec::new();
    let mut toggles = Vec::new();
    for _ in 0..6 {
        toggles.push(heartbeat.next_toggle());
        levels.push(heartbeat.toggle());
    }

    assert_eq!(
        levels,
        [
            PinState::Low,
            PinState::High,
            PinState::Low,
            PinState::High,
            PinState::Low,
            PinState::High,
        ]
    );
    for (step, toggle) in toggles.iter().enumerate() {
        let halves = u32::try_from(step + 1).unwrap();
        assert_eq!(*toggle, start + HEARTBEAT_HALF_PERIOD * halves);
    }
}

#[test]
fn heartbeat_period_is_200_ms() {
    let mut heartbeat = Heartbeat::new(Instant::from_millis(0));
    let high_started = heartbeat.next_toggle();
    heartbeat.toggle();
    heartbeat.toggle();
    assert_eq!(
        heartbeat.next_toggle() - high_started,
        Duration::from_millis(200)
    );
}

#[test]
fn late_toggle_does_not_shift_the_schedule() {
    // The main loop may wake late after a render; deadlines stay on the 100 ms grid.
    let mut heartbeat = Heartbeat::new(Instant::from_millis(0));
    heartbeat.toggle();
    heartbeat.toggle();
    heartbeat.toggle();
    assert_eq!(heartbeat.next_toggle(), Instant::from_millis(400));
}
